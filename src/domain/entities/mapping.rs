//! Mapping entity representing one short key and the URL it resolves to.

use chrono::{DateTime, Utc};

/// A stored association between a short key and a long URL.
///
/// `clicks` starts at zero and is only ever incremented by decodes. A rename
/// moves the whole mapping, counter included, to a new key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub key: String,
    pub long_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(key: String, long_url: String, clicks: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            key,
            long_url,
            clicks,
            created_at,
        }
    }

    /// Returns a copy of this mapping moved under `key`.
    pub fn renamed(&self, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..self.clone()
        }
    }
}

/// Input data for creating a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub key: String,
    pub long_url: String,
}

impl NewMapping {
    pub fn new(key: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            long_url: long_url.into(),
        }
    }
}
