//! Catalog rendering
//!
//! Writes the details block of each vehicle to an output stream, one block
//! after another, each terminated by a line separator.

use std::io::Write;

use tracing::debug;
use vehicle_catalog_types::Result;

use crate::model::{AnyVehicle, Car, Truck, Vehicle};

/// The fixed sample vehicles shown by the default catalog, car first
pub fn sample_fleet() -> Vec<AnyVehicle> {
    vec![
        Car::new("Toyota", "Corolla", 5, "Petrol").into(),
        Truck::new("Volvo", "FH16", 18.0, 6).into(),
    ]
}

/// Write every vehicle's details block in slice order, then flush
pub fn write_catalog<W: Write>(out: &mut W, vehicles: &[AnyVehicle]) -> Result<()> {
    for vehicle in vehicles {
        debug!(kind = %vehicle.kind(), make = vehicle.make(), model = vehicle.model(), "rendering vehicle");
        writeln!(out, "{}", vehicle.details())?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VehicleKind;

    #[test]
    fn test_sample_fleet_order() {
        let fleet = sample_fleet();
        let kinds: Vec<VehicleKind> = fleet.iter().map(|v| v.kind()).collect();
        assert_eq!(kinds, vec![VehicleKind::Car, VehicleKind::Truck]);
    }

    #[test]
    fn test_empty_catalog_writes_nothing() {
        let mut buf = Vec::new();
        write_catalog(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_each_block_is_newline_terminated() {
        let mut buf = Vec::new();
        let car: AnyVehicle = Car::new("Kia", "Ceed", 5, "Diesel").into();
        write_catalog(&mut buf, &[car.clone()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, format!("{}\n", car.details()));
    }
}
