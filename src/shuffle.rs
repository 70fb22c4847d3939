//! Seeded permutation generator for quiz ordering.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Produce a random permutation of `[0, n)` using Fisher–Yates.
///
/// The same `(n, seed)` pair always yields the same permutation, so quiz
/// order is reproducible in tests. Callers wanting a fresh order seed this
/// from a process-wide random source.
pub fn permute(n: usize, seed: u64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    let mut rng = SmallRng::seed_from_u64(seed);
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        order.swap(i, j);
    }
    order
}
