pub mod poll_response;
pub mod stats_response;
