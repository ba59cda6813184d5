//! Per-category row counts for one account address.

use serde::Serialize;

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatsResponse {
    pub email: String,
    pub info: i64,
    #[serde(rename = "pub")]
    pub pub_: i64,
    pub traite: i64,
    pub total: i64,
}
