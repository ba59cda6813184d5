//! Summary returned by the polling endpoints.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PollResponse {
    pub status: &'static str,
    pub count: usize,
    pub email_account: String,
}

impl PollResponse {
    pub fn success(count: usize, email_account: String) -> Self {
        PollResponse {
            status: "success",
            count,
            email_account,
        }
    }
}
