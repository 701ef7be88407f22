//! # Responders
//!
//! Each responder turns validated path parameters into a [`Reply`]. They
//! hold no state between calls and know nothing about the HTTP framework.
//!
//! * [`StatusResponder`] - always replies with the requested status code.
//! * [`RandomFaultResponder`] - replies with the requested status code for a
//!   percentage of requests, after an optional delay.
//! * [`DelayResponder`] - replies with a success message after a delay.
//!
//! [`Reply`]: crate::model::Reply

mod random;
pub use random::{RandomFaultResponder, MAX_ERROR_PERCENT, MIN_ERROR_PERCENT};

mod status;
pub use status::StatusResponder;

mod timeout;
pub use timeout::DelayResponder;
