//! In-process implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::{InsertOutcome, MappingRepository, RenameOutcome};
use crate::error::RegistryError;

#[derive(Debug, Clone)]
struct Target {
    long_url: String,
    created_at: DateTime<Utc>,
}

/// The three relations, only ever touched together under one lock.
#[derive(Debug, Default)]
struct Tables {
    forward: HashMap<String, Target>,
    reverse: HashMap<String, String>,
    clicks: HashMap<String, i64>,
}

impl Tables {
    fn mapping(&self, key: &str) -> Option<Mapping> {
        let target = self.forward.get(key)?;
        let clicks = self.clicks.get(key).copied().unwrap_or(0);

        Some(Mapping::new(
            key.to_string(),
            target.long_url.clone(),
            clicks,
            target.created_at,
        ))
    }
}

/// Repository keeping every mapping in memory.
///
/// Each registry instance owns its own tables, so independent registries
/// (one per test, per tenant) never share state. Contents are lost when the
/// process exits.
#[derive(Debug, Default)]
pub struct MemoryMappingRepository {
    tables: RwLock<Tables>,
}

impl MemoryMappingRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        debug!("Using in-memory mapping storage");
        Self::default()
    }
}

#[async_trait]
impl MappingRepository for MemoryMappingRepository {
    async fn find_by_key(&self, key: &str) -> Result<Option<Mapping>, RegistryError> {
        Ok(self.tables.read().await.mapping(key))
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Mapping>, RegistryError> {
        let tables = self.tables.read().await;

        Ok(tables
            .reverse
            .get(long_url)
            .and_then(|key| tables.mapping(key)))
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<InsertOutcome, RegistryError> {
        let mut tables = self.tables.write().await;

        if let Some(existing) = tables
            .reverse
            .get(&new_mapping.long_url)
            .and_then(|key| tables.mapping(key))
        {
            return Ok(InsertOutcome::LongUrlExists(existing));
        }

        if tables.forward.contains_key(&new_mapping.key) {
            return Ok(InsertOutcome::KeyTaken);
        }

        let NewMapping { key, long_url } = new_mapping;
        let created_at = Utc::now();

        tables.forward.insert(
            key.clone(),
            Target {
                long_url: long_url.clone(),
                created_at,
            },
        );
        tables.reverse.insert(long_url.clone(), key.clone());
        tables.clicks.insert(key.clone(), 0);

        Ok(InsertOutcome::Inserted(Mapping::new(key, long_url, 0, created_at)))
    }

    async fn record_click(&self, key: &str) -> Result<Option<Mapping>, RegistryError> {
        let mut tables = self.tables.write().await;

        if !tables.forward.contains_key(key) {
            return Ok(None);
        }

        *tables.clicks.entry(key.to_string()).or_insert(0) += 1;

        Ok(tables.mapping(key))
    }

    async fn rename(&self, from: &str, to: &str) -> Result<RenameOutcome, RegistryError> {
        let mut tables = self.tables.write().await;

        let Some(source) = tables.mapping(from) else {
            return Ok(RenameOutcome::SourceMissing);
        };

        if from == to {
            return Ok(RenameOutcome::Renamed(source));
        }

        if tables.forward.contains_key(to) {
            return Ok(RenameOutcome::AliasTaken);
        }

        // Both presence checks passed under the write lock.
        if let Some(target) = tables.forward.remove(from) {
            tables.forward.insert(to.to_string(), target);
        }
        let clicks = tables.clicks.remove(from).unwrap_or(0);
        tables.clicks.insert(to.to_string(), clicks);
        tables.reverse.insert(source.long_url.clone(), to.to_string());

        Ok(RenameOutcome::Renamed(source.renamed(to)))
    }

    async fn count(&self) -> Result<i64, RegistryError> {
        Ok(self.tables.read().await.forward.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    async fn seeded(key: &str, url: &str) -> MemoryMappingRepository {
        let repo = MemoryMappingRepository::new();
        repo.insert(NewMapping::new(key, url)).await.unwrap();
        repo
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = MemoryMappingRepository::new();

        let outcome = repo
            .insert(NewMapping::new("abc123", "https://example.com"))
            .await
            .unwrap();

        let InsertOutcome::Inserted(mapping) = outcome else {
            panic!("expected insert, got {:?}", outcome);
        };
        assert_eq!(mapping.key, "abc123");
        assert_eq!(mapping.clicks, 0);

        let by_key = repo.find_by_key("abc123").await.unwrap().unwrap();
        let by_url = repo
            .find_by_long_url("https://example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_key, by_url);
    }

    #[tokio::test]
    async fn test_insert_existing_long_url_returns_existing() {
        let repo = seeded("abc123", "https://example.com").await;

        let outcome = repo
            .insert(NewMapping::new("zzz999", "https://example.com"))
            .await
            .unwrap();

        match outcome {
            InsertOutcome::LongUrlExists(existing) => assert_eq!(existing.key, "abc123"),
            other => panic!("expected LongUrlExists, got {:?}", other),
        }
        assert!(repo.find_by_key("zzz999").await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_taken_key() {
        let repo = seeded("abc123", "https://example.com").await;

        let outcome = repo
            .insert(NewMapping::new("abc123", "https://other.com"))
            .await
            .unwrap();

        assert_eq!(outcome, InsertOutcome::KeyTaken);
        assert!(
            repo.find_by_long_url("https://other.com")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_record_click() {
        let repo = seeded("abc123", "https://example.com").await;

        repo.record_click("abc123").await.unwrap();
        let mapping = repo.record_click("abc123").await.unwrap().unwrap();

        assert_eq!(mapping.clicks, 2);
        assert!(repo.record_click("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rename_moves_all_relations() {
        let repo = seeded("abc123", "https://example.com").await;
        repo.record_click("abc123").await.unwrap();

        let outcome = repo.rename("abc123", "promo").await.unwrap();

        let RenameOutcome::Renamed(mapping) = outcome else {
            panic!("expected rename, got {:?}", outcome);
        };
        assert_eq!(mapping.key, "promo");
        assert_eq!(mapping.clicks, 1);

        assert!(repo.find_by_key("abc123").await.unwrap().is_none());
        assert!(repo.record_click("abc123").await.unwrap().is_none());
        assert_eq!(
            repo.find_by_long_url("https://example.com")
                .await
                .unwrap()
                .unwrap()
                .key,
            "promo"
        );
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_rename_missing_source() {
        let repo = MemoryMappingRepository::new();
        let outcome = repo.rename("nope", "promo").await.unwrap();
        assert_eq!(outcome, RenameOutcome::SourceMissing);
    }

    #[tokio::test]
    async fn test_rename_to_taken_key_changes_nothing() {
        let repo = seeded("one", "https://one.com").await;
        repo.insert(NewMapping::new("two", "https://two.com"))
            .await
            .unwrap();
        repo.record_click("two").await.unwrap();

        let outcome = repo.rename("two", "one").await.unwrap();

        assert_eq!(outcome, RenameOutcome::AliasTaken);
        let two = repo.find_by_key("two").await.unwrap().unwrap();
        assert_eq!(two.long_url, "https://two.com");
        assert_eq!(two.clicks, 1);
        assert_eq!(
            repo.find_by_key("one").await.unwrap().unwrap().long_url,
            "https://one.com"
        );
    }

    #[tokio::test]
    async fn test_rename_to_same_key_is_noop() {
        let repo = seeded("abc123", "https://example.com").await;

        let outcome = repo.rename("abc123", "abc123").await.unwrap();

        assert!(matches!(outcome, RenameOutcome::Renamed(ref m) if m.key == "abc123"));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_clicks_are_not_lost() {
        let repo = Arc::new(seeded("abc123", "https://example.com").await);

        let handles: Vec<_> = (0..100)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.record_click("abc123").await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let mapping = repo.find_by_key("abc123").await.unwrap().unwrap();
        assert_eq!(mapping.clicks, 100);
    }
}
