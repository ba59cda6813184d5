//! Insertable tracking record.

use super::category::Category;
use chrono::{DateTime, Utc};

/// Fields shared by all three tracking tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTrackedEmail {
    pub user_id: String,
    pub message_id: String,
    /// Address of the mailbox the message came from; the trigger keys on it.
    pub email: String,
    pub subject: Option<String>,
    pub sender: Option<String>,
    pub body: Option<String>,
    pub received_date: Option<DateTime<Utc>>,
}

/// A row to insert, tagged with its destination table.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackingRecord {
    Info(NewTrackedEmail),
    Pub(NewTrackedEmail),
    Traite {
        email: NewTrackedEmail,
        response_sent: bool,
    },
}

impl TrackingRecord {
    /// Build the record for `category`. Traite rows start with `response_sent = false`.
    pub fn new(category: Category, email: NewTrackedEmail) -> Self {
        match category {
            Category::Info => TrackingRecord::Info(email),
            Category::Pub => TrackingRecord::Pub(email),
            Category::Traite => TrackingRecord::Traite {
                email,
                response_sent: false,
            },
        }
    }

    pub fn category(&self) -> Category {
        match self {
            TrackingRecord::Info(_) => Category::Info,
            TrackingRecord::Pub(_) => Category::Pub,
            TrackingRecord::Traite { .. } => Category::Traite,
        }
    }

    pub fn fields(&self) -> &NewTrackedEmail {
        match self {
            TrackingRecord::Info(e) | TrackingRecord::Pub(e) => e,
            TrackingRecord::Traite { email, .. } => email,
        }
    }

    pub fn response_sent(&self) -> Option<bool> {
        match self {
            TrackingRecord::Traite { response_sent, .. } => Some(*response_sent),
            _ => None,
        }
    }
}

/// Identifiers of a freshly inserted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertedRow {
    pub id: i64,
    /// Set by the database trigger when `email` matches a known account.
    pub email_account_id: Option<i64>,
}
