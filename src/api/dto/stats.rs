//! DTOs for the click statistics endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub short_url: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_url: String,
    pub clicks: i64,
}
