//! Repository trait for short key mappings.

use crate::domain::entities::{Mapping, NewMapping};
use crate::error::RegistryError;
use async_trait::async_trait;

/// Result of an atomic insert-if-absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The mapping was stored with a zero click count.
    Inserted(Mapping),
    /// The key already belongs to another mapping; nothing was written.
    KeyTaken,
    /// The long URL is already mapped; carries the existing mapping.
    LongUrlExists(Mapping),
}

/// Result of an atomic key rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The mapping now lives under the new key.
    Renamed(Mapping),
    /// The source key has no mapping; nothing was written.
    SourceMissing,
    /// The target key belongs to another mapping; nothing was written.
    AliasTaken,
}

/// Storage contract backing the link registry.
///
/// Every method is atomic with respect to every other method on the same
/// repository: readers observe either the state before a mutation or the
/// state after it, never a mix of the two.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryMappingRepository`] - In-process maps
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Finds a mapping by its short key.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Internal`] on storage errors.
    async fn find_by_key(&self, key: &str) -> Result<Option<Mapping>, RegistryError>;

    /// Finds the mapping that currently owns `long_url` (reverse relation).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Internal`] on storage errors.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Mapping>, RegistryError>;

    /// Inserts a mapping unless its key or long URL is already present.
    ///
    /// Checking both relations and writing happen as one step, so two
    /// concurrent inserts of the same long URL cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Internal`] on storage errors.
    async fn insert(&self, new_mapping: NewMapping) -> Result<InsertOutcome, RegistryError>;

    /// Increments the click count of `key` by one.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Mapping))` with the updated count if the key exists
    /// - `Ok(None)` if the key is unknown
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Internal`] on storage errors.
    async fn record_click(&self, key: &str) -> Result<Option<Mapping>, RegistryError>;

    /// Moves the mapping stored under `from` to `to`, preserving its long URL
    /// and click count.
    ///
    /// Either all three relations reflect the new key afterwards or none of
    /// them changed.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Internal`] on storage errors; the rename is
    /// rolled back in that case.
    async fn rename(&self, from: &str, to: &str) -> Result<RenameOutcome, RegistryError>;

    /// Counts stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, RegistryError>;
}
