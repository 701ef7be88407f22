//! # Delayed success
//!
//! Latency only: the reply is always `200 OK`.

use crate::{latency, model::Reply};

/// Replies with a success message after a delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelayResponder;

impl DelayResponder {
    /// Wait for `timeout_ms` milliseconds, then reply `200 OK`.
    ///
    /// `verb` is the method label the request came in with. Zero and negative
    /// timeouts reply immediately.
    pub async fn respond(&self, timeout_ms: i64, verb: &str) -> Reply {
        latency::induce(timeout_ms).await;
        Reply::text(format!(
            "{} request completed after {}ms delay",
            verb, timeout_ms
        ))
    }
}
