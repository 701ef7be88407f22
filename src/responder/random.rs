//! # Random faults
//!
//! Faults injected for a percentage of requests, after an optional delay.

use crate::{
    decider::{Decider, ThreadRngDecider},
    error::Error,
    latency,
    model::Reply,
};
use std::{fmt, sync::Arc};

/// Lowest accepted error percentage.
pub const MIN_ERROR_PERCENT: i32 = 0;
/// Highest accepted error percentage.
pub const MAX_ERROR_PERCENT: i32 = 100;

/// Replies with a fault for a percentage of requests, after a delay.
///
/// The source of randomness is injected, so it can be shared between
/// concurrent requests or replaced by a deterministic one.
#[derive(Clone)]
pub struct RandomFaultResponder {
    decider: Arc<dyn Decider>,
}

impl RandomFaultResponder {
    /// Create a new `RandomFaultResponder` with the given decider.
    pub fn new(decider: Arc<dyn Decider>) -> Self {
        RandomFaultResponder { decider }
    }

    /// Reply with `status_code` for `error_percent`% of the calls.
    ///
    /// An error percentage outside `0..=100` is rejected with a `400` before
    /// any delay or draw. Otherwise the call waits `delay_ms` milliseconds,
    /// rolls once, and replies with a fault when the roll is at most
    /// `error_percent`.
    pub async fn respond(&self, error_percent: i32, delay_ms: i64, status_code: i32) -> Reply {
        let error_percent = match validate_error_percent(error_percent) {
            Ok(error_percent) => error_percent,
            Err(err) => {
                tracing::warn!(error_percent, "rejecting request: {}", err);
                return Reply::invalid(err.to_string());
            }
        };

        latency::induce(delay_ms).await;

        if self.decider.decide(error_percent) {
            tracing::debug!(error_percent, status_code, "injecting fault");
            Reply::fault(status_code)
        } else {
            Reply::success()
        }
    }
}

impl Default for RandomFaultResponder {
    fn default() -> Self {
        RandomFaultResponder::new(Arc::new(ThreadRngDecider))
    }
}

impl fmt::Debug for RandomFaultResponder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomFaultResponder").finish_non_exhaustive()
    }
}

fn validate_error_percent(error_percent: i32) -> Result<u32, Error> {
    if (MIN_ERROR_PERCENT..=MAX_ERROR_PERCENT).contains(&error_percent) {
        Ok(error_percent.unsigned_abs())
    } else {
        Err(Error::InvalidErrorPercent(error_percent))
    }
}
