//! Tracking-table records: categories, insertable records and stored rows.

pub mod category;
pub mod record;
pub mod tracked_email;
