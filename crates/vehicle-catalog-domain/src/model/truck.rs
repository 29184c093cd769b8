//! Cargo truck

use super::vehicle::{identity_lines, Vehicle, VehicleKind};

/// Cargo truck
#[derive(Debug, Clone, PartialEq)]
pub struct Truck {
    make: String,
    model: String,
    /// Maximum payload in tons
    payload_capacity: f64,
    wheels: u32,
}

impl Truck {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        payload_capacity: f64,
        wheels: u32,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            payload_capacity,
            wheels,
        }
    }

    pub fn payload_capacity(&self) -> f64 {
        self.payload_capacity
    }

    pub fn wheels(&self) -> u32 {
        self.wheels
    }
}

impl Vehicle for Truck {
    fn make(&self) -> &str {
        &self.make
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Truck
    }

    fn details(&self) -> String {
        // f64 Display never uses exponent form and drops a zero fraction:
        // 18.0 renders as "18", 1e21 as "1000000000000000000000"
        format!(
            "{}\n  Payload Capacity: {} tons\n  Wheels: {}",
            identity_lines(self),
            self.payload_capacity,
            self.wheels
        )
    }
}
