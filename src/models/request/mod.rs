pub mod poll_request;
pub mod tracked_params;
