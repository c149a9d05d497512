//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; request bodies
//! that need field-level checks use validator.

pub mod custom;
pub mod decode;
pub mod encode;
pub mod health;
pub mod stats;
