//! Injectable source of randomness.
//!
//! Every random decision in an acquisition (ladder country, record pick,
//! search page, fallback entry, caller coin flip) goes through a
//! [`RandomSource`], so tests can seed it and get the same path every run.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform random choices.
pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..len`. `len` is never zero.
    fn index(&self, len: usize) -> usize;

    /// Fair coin flip.
    fn coin(&self) -> bool {
        self.index(2) == 0
    }
}

/// Pick one element uniformly, or `None` for an empty slice.
pub fn pick<'a, T>(random: &dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(random.index(items.len()))
}

/// Production randomness backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Deterministic randomness for tests and reproducible CLI runs.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn index(&self, len: usize) -> usize {
        self.rng.lock().random_range(0..len)
    }
}

/// Always returns the same index, clamped to the slice length.
///
/// Handy in tests that need to know exactly which element gets picked.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub usize);

#[cfg(test)]
impl RandomSource for FixedRandom {
    fn index(&self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_empty_is_none() {
        let empty: [u8; 0] = [];
        assert!(pick(&ThreadRandom, &empty).is_none());
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let seq_a: Vec<_> = (0..20).map(|_| a.index(100)).collect();
        let seq_b: Vec<_> = (0..20).map(|_| b.index(100)).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_index_in_range() {
        let random = SeededRandom::new(7);
        for len in 1..50 {
            assert!(random.index(len) < len);
        }
    }

    #[test]
    fn test_fixed_clamps() {
        let items = ["a", "b", "c"];
        assert_eq!(pick(&FixedRandom(1), &items), Some(&"b"));
        assert_eq!(pick(&FixedRandom(99), &items), Some(&"c"));
        assert!(FixedRandom(0).coin());
        assert!(!FixedRandom(1).coin());
    }
}
