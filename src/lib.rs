//! Fault injection over HTTP
//!
//! This crate provides an HTTP service that returns errors and latency on
//! demand, to exercise the timeouts, retries and circuit breakers of its
//! clients.
//!
//! ## Endpoints
//!
//! Every endpoint answers GET, POST, PUT, DELETE and PATCH the same way:
//!
//! * `/api/error/{statusCode}` - always reply with `statusCode`.
//! * `/api/random/{errorPercent}/{delayMs}/{statusCode}` - wait `delayMs`,
//!   then reply with `statusCode` for `errorPercent`% of the requests.
//! * `/api/timeout/{timeoutMs}` - wait `timeoutMs`, then reply `200 OK`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fault_api::{decider::ThreadRngDecider, server};
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), fault_api::Error> {
//! server::serve("127.0.0.1:8080".parse().unwrap(), Arc::new(ThreadRngDecider)).await?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod decider;
pub mod latency;
pub mod model;
pub mod responder;
pub mod routes;
pub mod server;

mod error;
pub use error::Error;

#[cfg(test)]
mod test_utils;
