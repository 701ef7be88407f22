//! # Induced latency
//!
//! Delays are requested in milliseconds as signed integers. Zero and
//! negative values mean no delay at all: they are not rejected.
//!
//! The delay suspends the current task only. Other requests keep running,
//! and dropping the future abandons the delay.

use std::time::Duration;
use tokio::time;

/// Convert a requested delay into a [`Duration`], or `None` for no delay.
pub fn from_millis(delay_ms: i64) -> Option<Duration> {
    u64::try_from(delay_ms)
        .ok()
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}

/// Suspend the current task for `delay_ms` milliseconds.
pub async fn induce(delay_ms: i64) {
    if let Some(latency) = from_millis(delay_ms) {
        tracing::debug!(delay_ms, "inducing latency");
        time::sleep(latency).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn from_millis_values() {
        assert_eq!(from_millis(i64::MIN), None);
        assert_eq!(from_millis(-1), None);
        assert_eq!(from_millis(0), None);
        assert_eq!(from_millis(1), Some(Duration::from_millis(1)));
        assert_eq!(from_millis(2000), Some(Duration::from_secs(2)));
    }

    #[tokio::test]
    async fn latency_none() {
        for delay_ms in [0, -1, -1000, i64::MIN] {
            let now = Instant::now();
            induce(delay_ms).await;
            let elapsed = now.elapsed();

            assert!(elapsed < Duration::from_millis(5));
        }
    }

    #[tokio::test]
    async fn latency_all() {
        for _ in 0..10 {
            let now = Instant::now();
            induce(10).await;
            let elapsed = now.elapsed();

            assert!(elapsed >= Duration::from_millis(10));
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn latency_is_per_task() {
        let now = Instant::now();
        let tasks: Vec<_> = (0..20).map(|_| tokio::spawn(induce(100))).collect();
        for task in tasks {
            task.await.unwrap();
        }
        let elapsed = now.elapsed();

        assert!(elapsed >= Duration::from_millis(100));
        assert!(elapsed < Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn latency_abandoned_on_drop() {
        let now = Instant::now();
        let res = time::timeout(Duration::from_millis(10), induce(10_000)).await;
        let elapsed = now.elapsed();

        assert!(res.is_err());
        assert!(elapsed < Duration::from_secs(1));
    }
}
