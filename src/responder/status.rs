//! # Fixed status

use crate::model::Reply;

/// Replies with a fixed status code and an error body.
///
/// Any integer is accepted and echoed, valid HTTP status or not.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusResponder;

impl StatusResponder {
    pub fn respond(&self, status_code: i32) -> Reply {
        tracing::debug!(status_code, "replying with requested status");
        Reply::fault(status_code)
    }
}
