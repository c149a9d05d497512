//! Infrastructure layer for storage integrations.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory and PostgreSQL repository implementations

pub mod persistence;
