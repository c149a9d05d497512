//! Storage backends implementing [`crate::domain::repositories::MappingRepository`].
//!
//! # Repositories
//!
//! - [`MemoryMappingRepository`] - In-process tables behind an async lock
//! - [`PgMappingRepository`] - PostgreSQL via SQLx

pub mod memory_mapping_repository;
pub mod pg_mapping_repository;

pub use memory_mapping_repository::MemoryMappingRepository;
pub use pg_mapping_repository::PgMappingRepository;
