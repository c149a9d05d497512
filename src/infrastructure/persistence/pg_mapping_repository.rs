//! PostgreSQL implementation of the mapping repository.
//!
//! All three relations live in one `urls` table: the primary key on
//! `short_key` is the forward relation, the unique index on `md5(long_url)` is
//! the reverse relation, and `click_count` holds the counter. Keeping them in one
//! row means no statement can update one relation without the others.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::{InsertOutcome, MappingRepository, RenameOutcome};
use crate::error::RegistryError;

const MAPPING_COLUMNS: &str = "short_key, long_url, click_count, created_at";

#[derive(sqlx::FromRow)]
struct MappingRow {
    short_key: String,
    long_url: String,
    click_count: i64,
    created_at: DateTime<Utc>,
}

impl From<MappingRow> for Mapping {
    fn from(row: MappingRow) -> Self {
        Mapping::new(row.short_key, row.long_url, row.click_count, row.created_at)
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

/// PostgreSQL repository for mapping storage.
///
/// Uses parameterized queries only; user input never reaches SQL text.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn find_by_key(&self, key: &str) -> Result<Option<Mapping>, RegistryError> {
        let row = sqlx::query_as::<_, MappingRow>(&format!(
            "SELECT {MAPPING_COLUMNS} FROM urls WHERE short_key = $1"
        ))
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Mapping::from))
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Mapping>, RegistryError> {
        let row = sqlx::query_as::<_, MappingRow>(&format!(
            "SELECT {MAPPING_COLUMNS} FROM urls WHERE md5(long_url) = md5($1) AND long_url = $1"
        ))
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Mapping::from))
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<InsertOutcome, RegistryError> {
        let inserted = sqlx::query_as::<_, MappingRow>(&format!(
            r#"
            INSERT INTO urls (short_key, long_url)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            RETURNING {MAPPING_COLUMNS}
            "#
        ))
        .bind(&new_mapping.key)
        .bind(&new_mapping.long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        if let Some(row) = inserted {
            return Ok(InsertOutcome::Inserted(row.into()));
        }

        // Mappings are never deleted, so a long URL conflict is still visible here.
        match self.find_by_long_url(&new_mapping.long_url).await? {
            Some(existing) => Ok(InsertOutcome::LongUrlExists(existing)),
            None => {
                debug!("Key {} already taken", new_mapping.key);
                Ok(InsertOutcome::KeyTaken)
            }
        }
    }

    async fn record_click(&self, key: &str) -> Result<Option<Mapping>, RegistryError> {
        let row = sqlx::query_as::<_, MappingRow>(&format!(
            r#"
            UPDATE urls SET click_count = click_count + 1
            WHERE short_key = $1
            RETURNING {MAPPING_COLUMNS}
            "#
        ))
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Mapping::from))
    }

    async fn rename(&self, from: &str, to: &str) -> Result<RenameOutcome, RegistryError> {
        let mut tx = self.pool.begin().await?;

        let source = sqlx::query_as::<_, MappingRow>(&format!(
            "SELECT {MAPPING_COLUMNS} FROM urls WHERE short_key = $1 FOR UPDATE"
        ))
        .bind(from)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(source) = source else {
            tx.rollback().await?;
            return Ok(RenameOutcome::SourceMissing);
        };

        if from == to {
            tx.rollback().await?;
            return Ok(RenameOutcome::Renamed(source.into()));
        }

        let taken: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM urls WHERE short_key = $1)")
                .bind(to)
                .fetch_one(&mut *tx)
                .await?;

        if taken {
            tx.rollback().await?;
            return Ok(RenameOutcome::AliasTaken);
        }

        let renamed = sqlx::query_as::<_, MappingRow>(&format!(
            r#"
            UPDATE urls SET short_key = $2
            WHERE short_key = $1
            RETURNING {MAPPING_COLUMNS}
            "#
        ))
        .bind(from)
        .bind(to)
        .fetch_one(&mut *tx)
        .await;

        match renamed {
            Ok(row) => {
                tx.commit().await?;
                Ok(RenameOutcome::Renamed(row.into()))
            }
            // A concurrent insert claimed the alias between the check and the update.
            Err(e) if is_unique_violation(&e) => {
                tx.rollback().await?;
                Ok(RenameOutcome::AliasTaken)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn count(&self) -> Result<i64, RegistryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
