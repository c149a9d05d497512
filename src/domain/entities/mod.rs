//! Core domain entities.
//!
//! - [`Mapping`] - A stored short key ↔ long URL association with its click count
//! - [`NewMapping`] - Input for creating a mapping

pub mod mapping;

pub use mapping::{Mapping, NewMapping};
