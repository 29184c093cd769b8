//! Domain services

pub mod catalog;

pub use catalog::{sample_fleet, write_catalog};
