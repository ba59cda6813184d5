//! Tracking row as stored in SQLite and exposed via API.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Serialize, FromRow)]
pub struct TrackedEmail {
    pub id: i64,
    pub user_id: String,
    pub message_id: String,
    pub email: String,
    pub email_account_id: Option<i64>,
    pub subject: Option<String>,
    pub sender: Option<String>,
    pub body: Option<String>,
    pub received_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_sent: Option<bool>,
    pub created_at: DateTime<Utc>,
}
