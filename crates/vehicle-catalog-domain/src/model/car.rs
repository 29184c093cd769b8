//! Passenger car

use super::vehicle::{identity_lines, Vehicle, VehicleKind};

/// Passenger car
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    make: String,
    model: String,
    /// Number of passenger seats
    seating_capacity: u32,
    /// Fuel description (e.g., "Petrol", "Diesel")
    fuel_type: String,
}

impl Car {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        seating_capacity: u32,
        fuel_type: impl Into<String>,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            seating_capacity,
            fuel_type: fuel_type.into(),
        }
    }

    pub fn seating_capacity(&self) -> u32 {
        self.seating_capacity
    }

    pub fn fuel_type(&self) -> &str {
        &self.fuel_type
    }
}

impl Vehicle for Car {
    fn make(&self) -> &str {
        &self.make
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn details(&self) -> String {
        format!(
            "{}\n  Seating Capacity: {}\n  Fuel Type: {}",
            identity_lines(self),
            self.seating_capacity,
            self.fuel_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corolla_details() {
        let car = Car::new("Toyota", "Corolla", 5, "Petrol");
        assert_eq!(
            car.details(),
            "Car Details:\n  Make: Toyota\n  Model: Corolla\n  Seating Capacity: 5\n  Fuel Type: Petrol"
        );
    }

    #[test]
    fn test_details_is_idempotent() {
        let car = Car::new("Honda", "Civic", 4, "Hybrid");
        assert_eq!(car.details(), car.details());
    }

    #[test]
    fn test_fields_appear_in_order() {
        let car = Car::new("Mazda", "MX-5", 2, "Petrol");
        let details = car.details();

        let positions: Vec<usize> = ["Car Details:", "Mazda", "MX-5", "2", "Petrol"]
            .iter()
            .map(|needle| details.find(needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{details}");
    }

    #[test]
    fn test_accessors() {
        let car = Car::new("Tesla", "Model 3", 5, "Electric");
        assert_eq!(car.make(), "Tesla");
        assert_eq!(car.model(), "Model 3");
        assert_eq!(car.seating_capacity(), 5);
        assert_eq!(car.fuel_type(), "Electric");
        assert_eq!(car.kind(), VehicleKind::Car);
    }

    #[test]
    fn test_zero_seats_accepted() {
        let car = Car::new("", "", 0, "");
        assert!(car.details().contains("Seating Capacity: 0"));
    }
}
