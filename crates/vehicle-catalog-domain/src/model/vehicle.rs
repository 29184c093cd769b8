//! Shared vehicle capability and the closed set of variants

use std::fmt;

use super::{Car, Truck};

/// Vehicle variant discriminant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VehicleKind {
    Car,
    Truck,
}

impl VehicleKind {
    /// Header label used in the details block
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Truck => "Truck",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Common identity and description capability for every vehicle.
///
/// Identity fields are fixed at construction; implementors only expose them
/// through these accessors.
pub trait Vehicle {
    /// Manufacturer name
    fn make(&self) -> &str;

    /// Model name
    fn model(&self) -> &str;

    fn kind(&self) -> VehicleKind;

    /// Multi-line details block, without a trailing line separator
    fn details(&self) -> String;
}

/// Header and identity lines shared by every details block
pub(crate) fn identity_lines(vehicle: &impl Vehicle) -> String {
    format!(
        "{} Details:\n  Make: {}\n  Model: {}",
        vehicle.kind().label(),
        vehicle.make(),
        vehicle.model()
    )
}

/// Any vehicle in the catalog
#[derive(Debug, Clone, PartialEq)]
pub enum AnyVehicle {
    Car(Car),
    Truck(Truck),
}

impl Vehicle for AnyVehicle {
    fn make(&self) -> &str {
        match self {
            AnyVehicle::Car(car) => car.make(),
            AnyVehicle::Truck(truck) => truck.make(),
        }
    }

    fn model(&self) -> &str {
        match self {
            AnyVehicle::Car(car) => car.model(),
            AnyVehicle::Truck(truck) => truck.model(),
        }
    }

    fn kind(&self) -> VehicleKind {
        match self {
            AnyVehicle::Car(_) => VehicleKind::Car,
            AnyVehicle::Truck(_) => VehicleKind::Truck,
        }
    }

    fn details(&self) -> String {
        match self {
            AnyVehicle::Car(car) => car.details(),
            AnyVehicle::Truck(truck) => truck.details(),
        }
    }
}

impl From<Car> for AnyVehicle {
    fn from(car: Car) -> Self {
        AnyVehicle::Car(car)
    }
}

impl From<Truck> for AnyVehicle {
    fn from(truck: Truck) -> Self {
        AnyVehicle::Truck(truck)
    }
}

impl fmt::Display for AnyVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.details())
    }
}
