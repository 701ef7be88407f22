//! Utilities for testing this crate

use crate::decider::Decider;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Decider that cycles through a fixed list of rolls and counts its calls.
pub struct SequenceDecider {
    rolls: Vec<u32>,
    calls: AtomicUsize,
}

impl SequenceDecider {
    pub fn new(rolls: Vec<u32>) -> Self {
        assert!(!rolls.is_empty());
        SequenceDecider {
            rolls,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Decider for SequenceDecider {
    fn roll(&self) -> u32 {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.rolls[call % self.rolls.len()]
    }
}
