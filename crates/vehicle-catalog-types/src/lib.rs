//! Core types for the vehicle catalog

mod error;

pub use error::*;
