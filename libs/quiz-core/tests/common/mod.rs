//! Shared helpers for quiz-core integration tests.

#![allow(dead_code)]

pub mod fixtures;

use quiz_core::RandomSource;

/// Keeps catalog order by drawing the upper bound on every step.
pub struct InOrder;

impl RandomSource for InOrder {
    fn next_index(&mut self, upper: usize) -> usize {
        upper
    }
}

/// Replays fixed draws; falls back to the upper bound once exhausted.
pub struct Draws(pub Vec<usize>);

impl RandomSource for Draws {
    fn next_index(&mut self, upper: usize) -> usize {
        if self.0.is_empty() {
            return upper;
        }
        self.0.remove(0).min(upper)
    }
}
