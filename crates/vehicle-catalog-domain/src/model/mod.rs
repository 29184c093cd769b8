//! Domain model types

pub mod car;
pub mod truck;
pub mod vehicle;

pub use car::Car;
pub use truck::Truck;
pub use vehicle::{AnyVehicle, Vehicle, VehicleKind};
