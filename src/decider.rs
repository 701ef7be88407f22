//! # Decider
//!
//! This module contains the [`Decider`] trait, the source of randomness used
//! to decide if a fault should be injected. A decider rolls a number between
//! [`MIN_ROLL`] and [`MAX_ROLL`] inclusive, and a fault is injected when the
//! roll is less than or equal to the requested error percentage. This makes
//! 0% never fault and 100% always fault.
//!
//! Deciders are shared between concurrent requests, so they must be
//! `Send + Sync`.
//!
//! ## Example
//!
//! ```rust
//! use fault_api::decider::{Decider, SeededDecider, ThreadRngDecider};
//!
//! // Fixed roll: always 42.
//! assert!(42u32.decide(42));
//! assert!(!42u32.decide(41));
//!
//! // Per-thread generator, the default for the server.
//! let roll = ThreadRngDecider.roll();
//! assert!((1..=100).contains(&roll));
//!
//! // Reproducible sequence from a seed.
//! let a = SeededDecider::new(7);
//! let b = SeededDecider::new(7);
//! assert_eq!(a.roll(), b.roll());
//!
//! // Any closure returning a roll.
//! let decision = (|| 100u32).decide(99);
//! assert!(!decision);
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Lowest value a decider rolls.
pub const MIN_ROLL: u32 = 1;
/// Highest value a decider rolls.
pub const MAX_ROLL: u32 = 100;

/// Trait for deciding if a fault should be injected.
pub trait Decider: Send + Sync {
    /// Roll a number between [`MIN_ROLL`] and [`MAX_ROLL`], inclusive.
    fn roll(&self) -> u32;

    /// Decide if a fault should be injected for the given error percentage.
    fn decide(&self, error_percent: u32) -> bool {
        self.roll() <= error_percent
    }
}

/// Decider drawing from the generator local to the calling thread.
///
/// Concurrent requests running on different worker threads never contend
/// for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngDecider;

impl Decider for ThreadRngDecider {
    fn roll(&self) -> u32 {
        rand::thread_rng().gen_range(MIN_ROLL..=MAX_ROLL)
    }
}

/// Decider drawing from a single seeded generator.
///
/// Rolls are reproducible for a given seed and order of calls. Calls are
/// serialized on an internal lock, held only for the draw itself.
#[derive(Debug)]
pub struct SeededDecider {
    rng: Mutex<StdRng>,
}

impl SeededDecider {
    /// Create a new `SeededDecider` from a seed.
    pub fn new(seed: u64) -> Self {
        SeededDecider {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Decider for SeededDecider {
    fn roll(&self) -> u32 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(MIN_ROLL..=MAX_ROLL)
    }
}

impl Decider for u32 {
    fn roll(&self) -> u32 {
        *self
    }
}

impl<F> Decider for F
where
    F: Fn() -> u32 + Send + Sync,
{
    fn roll(&self) -> u32 {
        self()
    }
}
