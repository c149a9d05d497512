//! Domain layer containing the mapping entity and the storage contract.
//!
//! The domain layer has no dependency on any concrete backend. The
//! [`repositories::MappingRepository`] trait is implemented by the in-memory
//! and PostgreSQL backends in [`crate::infrastructure::persistence`], and
//! consumed by [`crate::application::services::LinkRegistry`].
//!
//! # Relations
//!
//! A single key space backs three logical relations that always move together:
//!
//! - forward: short key → long URL
//! - reverse: long URL → short key
//! - clicks: short key → click count

pub mod entities;
pub mod repositories;
