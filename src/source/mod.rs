//! Mail retrieval and categorization seams.
//!
//! Handlers only see the [`MailSource`] and [`Categorizer`] traits; the concrete
//! implementations are injected through `AppState`.

use crate::models::tracking::{category::Category, record::NewTrackedEmail};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

pub mod spool;

pub use spool::SpoolSource;

/// A message handed over by a mail source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RetrievedEmail {
    pub message_id: String,
    pub subject: Option<String>,
    pub sender: Option<String>,
    pub body: Option<String>,
    pub date: Option<DateTime<Utc>>,
    /// Lowercased header names.
    pub headers: HashMap<String, String>,
}

impl RetrievedEmail {
    /// Tracking fields for this message as seen from `email`'s mailbox.
    pub fn into_tracked(self, user_id: &str, email: &str) -> NewTrackedEmail {
        NewTrackedEmail {
            user_id: user_id.to_string(),
            message_id: self.message_id,
            email: email.to_string(),
            subject: self.subject,
            sender: self.sender,
            body: self.body,
            received_date: self.date,
        }
    }
}

/// How the caller authenticates against its mailbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchMode {
    Poll {
        password: Option<String>,
        imap_server: Option<String>,
    },
    Unread {
        refresh_token: Option<String>,
        provider: Option<String>,
        imap_server: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub email: String,
    pub user_id: String,
    pub mode: FetchMode,
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("invalid account address for mail source: {0}")]
    InvalidAccount(String),
    #[error("mail source i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },
}

#[async_trait]
pub trait MailSource: Send + Sync {
    async fn fetch(&self, req: &FetchRequest) -> Result<Vec<RetrievedEmail>, SourceError>;
}

pub trait Categorizer: Send + Sync {
    fn categorize(&self, email: &RetrievedEmail) -> Category;
}

/// Files every message under `traite`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackCategorizer;

impl Categorizer for FallbackCategorizer {
    fn categorize(&self, _email: &RetrievedEmail) -> Category {
        Category::Traite
    }
}
