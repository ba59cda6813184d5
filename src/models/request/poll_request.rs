//! JSON bodies accepted by the mail polling endpoints.

use serde::Deserialize;

/// Body of `POST /poll-emails`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollRequest {
    pub email: Option<String>,
    pub user_id: Option<String>,
    pub password: Option<String>,
    pub imap_server: Option<String>,
}

/// Body of `POST /unread-emails`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadRequest {
    pub email: Option<String>,
    pub user_id: Option<String>,
    pub refresh_token: Option<String>,
    pub provider: Option<String>,
    pub imap_server: Option<String>,
}
