//! Query parameters of the read-side endpoints.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub email: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Counting window over `created_at`, half-open: `[start, end)`.
#[derive(Debug, Default, Deserialize)]
pub struct StatsParams {
    pub email: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}
