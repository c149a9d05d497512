//! The link registry: encode, decode, rename and click statistics.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::NewMapping;
use crate::domain::repositories::{InsertOutcome, MappingRepository, RenameOutcome};
use crate::error::RegistryError;
use crate::utils::key_generator::{DEFAULT_KEY_LENGTH, generate_key, validate_alias};
use crate::utils::short_url::{compose_short_url, extract_key};

/// Default number of key candidates tried before giving up.
pub const DEFAULT_MAX_KEY_ATTEMPTS: usize = 10;

/// Maps long URLs to short URLs and back, counting every resolution.
///
/// The registry owns a handle to its storage and holds no other state; two
/// registries over two repositories are fully independent. All atomicity
/// (dedup on insert, counter increments, renames) is delegated to the
/// repository's single-step operations.
pub struct LinkRegistry<R: MappingRepository + ?Sized> {
    repository: Arc<R>,
    base_url: String,
    key_length: usize,
    max_key_attempts: usize,
}

impl<R: MappingRepository + ?Sized> LinkRegistry<R> {
    /// Creates a registry with default key length and retry cap.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: base_url.into(),
            key_length: DEFAULT_KEY_LENGTH,
            max_key_attempts: DEFAULT_MAX_KEY_ATTEMPTS,
        }
    }

    /// Overrides the generated key length and the collision retry cap.
    pub fn with_key_policy(mut self, key_length: usize, max_key_attempts: usize) -> Self {
        self.key_length = key_length;
        self.max_key_attempts = max_key_attempts;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the short URL for `key` under this registry's prefix.
    pub fn short_url_for(&self, key: &str) -> String {
        compose_short_url(&self.base_url, key)
    }

    /// Extracts the key from a short URL issued under this registry's prefix.
    pub fn key_of<'a>(&self, short_url: &'a str) -> Result<&'a str, RegistryError> {
        extract_key(&self.base_url, short_url)
    }

    /// Returns the storage handle, e.g. for health checks.
    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Returns the short URL for `long_url`, creating a mapping on first use.
    ///
    /// # Deduplication
    ///
    /// If `long_url` is already mapped, its existing short URL is returned and
    /// its click count is left alone. Concurrent encodes of the same unseen
    /// URL converge on one key because the repository insert re-checks the
    /// reverse relation atomically.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidInput`] if `long_url` is empty or
    /// contains a NUL character, which PostgreSQL `TEXT` cannot hold.
    /// Returns [`RegistryError::Internal`] on storage errors or when every
    /// generated key collided.
    pub async fn encode(&self, long_url: &str) -> Result<String, RegistryError> {
        if long_url.is_empty() {
            return Err(RegistryError::invalid_input(
                "Invalid long URL",
                json!({ "reason": "long URL must not be empty" }),
            ));
        }

        if long_url.contains('\0') {
            return Err(RegistryError::invalid_input(
                "Invalid long URL",
                json!({ "reason": "long URL must not contain NUL characters" }),
            ));
        }

        if let Some(existing) = self.repository.find_by_long_url(long_url).await? {
            debug!("Reusing key {} for {}", existing.key, long_url);
            return Ok(self.short_url_for(&existing.key));
        }

        for attempt in 1..=self.max_key_attempts {
            let key = generate_key(self.key_length);

            match self
                .repository
                .insert(NewMapping::new(key.clone(), long_url))
                .await?
            {
                InsertOutcome::Inserted(mapping) => {
                    info!("Created key {} for {}", mapping.key, mapping.long_url);
                    return Ok(self.short_url_for(&mapping.key));
                }
                InsertOutcome::LongUrlExists(existing) => {
                    return Ok(self.short_url_for(&existing.key));
                }
                InsertOutcome::KeyTaken => {
                    debug!("Key collision on {} (attempt {})", key, attempt);
                }
            }
        }

        Err(RegistryError::internal(
            "Failed to generate unique key",
            json!({
                "reason": "Too many collisions",
                "attempts": self.max_key_attempts,
            }),
        ))
    }

    /// Resolves a short URL and counts the click.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MalformedShortUrl`] if the prefix or key is missing.
    /// Returns [`RegistryError::NotFound`] if the key has no mapping.
    pub async fn decode(&self, short_url: &str) -> Result<String, RegistryError> {
        let key = extract_key(&self.base_url, short_url)?;

        let mapping = self
            .repository
            .record_click(key)
            .await?
            .ok_or_else(|| not_found(key))?;

        Ok(mapping.long_url)
    }

    /// Renames the key behind `short_url` to `custom_alias`.
    ///
    /// The long URL and click count move with the mapping and the old key
    /// stops resolving. Renaming a key to its current value succeeds without
    /// changing anything.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MalformedShortUrl`] if `short_url` cannot be parsed.
    /// Returns [`RegistryError::InvalidAlias`] if `custom_alias` fails validation.
    /// Returns [`RegistryError::SourceNotFound`] if the source key has no mapping.
    /// Returns [`RegistryError::AliasTaken`] if another mapping owns the alias.
    pub async fn make_custom(
        &self,
        short_url: &str,
        custom_alias: &str,
    ) -> Result<String, RegistryError> {
        let key = extract_key(&self.base_url, short_url)?;
        validate_alias(custom_alias)?;

        match self.repository.rename(key, custom_alias).await? {
            RenameOutcome::Renamed(mapping) => {
                if key != custom_alias {
                    info!(
                        "Renamed key {} to {} ({} clicks)",
                        key, mapping.key, mapping.clicks
                    );
                }
                Ok(self.short_url_for(&mapping.key))
            }
            RenameOutcome::SourceMissing => Err(RegistryError::source_not_found(
                "Original short URL does not exist",
                json!({ "key": key }),
            )),
            RenameOutcome::AliasTaken => Err(RegistryError::alias_taken(
                "Custom alias already taken",
                json!({ "alias": custom_alias }),
            )),
        }
    }

    /// Returns the click count of a short URL without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MalformedShortUrl`] if the prefix or key is missing.
    /// Returns [`RegistryError::NotFound`] if the key has no mapping.
    pub async fn get_click_stats(&self, short_url: &str) -> Result<i64, RegistryError> {
        let key = extract_key(&self.base_url, short_url)?;

        let mapping = self
            .repository
            .find_by_key(key)
            .await?
            .ok_or_else(|| not_found(key))?;

        Ok(mapping.clicks)
    }
}

fn not_found(key: &str) -> RegistryError {
    RegistryError::not_found("Short URL not found", json!({ "key": key }))
}
