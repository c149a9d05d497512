//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`MappingRepository`] - Forward, reverse and click-count relations

pub mod mapping_repository;

pub use mapping_repository::{InsertOutcome, MappingRepository, RenameOutcome};

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
