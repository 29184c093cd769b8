//! Vehicle catalog domain
//!
//! Vehicle models sharing a common `Vehicle` capability, and the service
//! that renders a catalog of them as text.

pub mod model;
pub mod service;

pub use model::{AnyVehicle, Car, Truck, Vehicle, VehicleKind};
pub use service::{sample_fleet, write_catalog};
