//! HTTP router and handlers.

use crate::app::AppState;
use axum::{
  Router,
  routing::{get, post},
};

pub mod error;
pub mod poll;
pub mod stats;
pub mod tracked;

/// Assemble the HTTP router with all routes.
pub fn build_router(state: AppState) -> Router {
  Router::new()
    .route("/poll-emails", post(poll::poll_emails))
    .route("/unread-emails", post(poll::unread_emails))
    .route("/tracked/:category", get(tracked::list_category))
    .route("/stats", get(stats::tracking_stats))
    .with_state(state)
}
