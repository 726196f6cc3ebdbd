//! Randomized question ordering.

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

/// Source of uniform random indices.
pub trait RandomSource {
    /// Draw an index uniformly from `0..=upper`.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl RandomSource for ThreadRng {
    fn next_index(&mut self, upper: usize) -> usize {
        self.random_range(0..=upper)
    }
}

impl RandomSource for StdRng {
    fn next_index(&mut self, upper: usize) -> usize {
        self.random_range(0..=upper)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, upper: usize) -> usize {
        (**self).next_index(upper)
    }
}

/// Return a shuffled copy of `items` (Fisher-Yates); the input is untouched.
pub fn shuffle<T: Clone, R: RandomSource + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffle_in_place(&mut shuffled, rng);
    shuffled
}

/// Fisher-Yates over the whole slice, walking from the back.
pub fn shuffle_in_place<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i);
        items.swap(i, j);
    }
}
