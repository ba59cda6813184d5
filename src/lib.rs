//! mailtrack library entrypoint.
//!
//! Modules:
//! - `app`: startup, configuration, shared state
//! - `http`: Axum router and handlers
//! - `db`: migrations and tracking-table queries
//! - `source`: mail source and categorizer seams
//! - `models`: typed records used across layers
//! - `util`: tracing setup and MIME helpers

pub mod app;
pub mod db;
pub mod http;
pub mod models;
pub mod source;
pub mod util;
