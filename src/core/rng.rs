//! Injectable randomness for the AI.
//!
//! ## Key Features
//!
//! - **Injectable**: the AI draws through the `RandomSource` trait, so tests can
//!   script every coin flip and pick
//! - **Deterministic**: `GameRng` with the same seed produces the same sequence
//! - **Resumable**: a stream position is two integers
//!
//! ```
//! use sliding_tac_toe::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! assert_eq!(a.pick(9), b.pick(9));
//! assert_eq!(a.chance(0.5), b.chance(0.5));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of the two random draws the AI needs.
pub trait RandomSource {
    /// Return true with the given probability.
    fn chance(&mut self, probability: f64) -> bool;

    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// ChaCha8 stream the match driver hands to the AI.
///
/// The seed is kept alongside the stream so a position can be captured as
/// `(seed, word_pos)` and replayed later.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Capture the stream position.
    #[must_use]
    pub fn snapshot(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.stream.get_word_pos(),
        }
    }

    /// Rebuild a stream at a captured position.
    #[must_use]
    pub fn restore(snapshot: &GameRngState) -> Self {
        let mut stream = ChaCha8Rng::seed_from_u64(snapshot.seed);
        stream.set_word_pos(snapshot.word_pos);
        Self {
            stream,
            seed: snapshot.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn chance(&mut self, probability: f64) -> bool {
        self.stream.gen_bool(probability)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.stream.gen_range(0..len)
    }
}

/// Captured `GameRng` position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// Words consumed from the ChaCha8 keystream.
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &mut GameRng, n: usize) -> Vec<usize> {
        (0..n).map(|_| rng.pick(9)).collect()
    }

    #[test]
    fn test_same_seed_same_draws() {
        assert_eq!(draws(&mut GameRng::new(42), 100), draws(&mut GameRng::new(42), 100));
        assert_ne!(draws(&mut GameRng::new(1), 30), draws(&mut GameRng::new(2), 30));
    }

    #[test]
    fn test_pick_in_range() {
        let mut rng = GameRng::new(7);
        for len in 1..=9 {
            for _ in 0..50 {
                assert!(rng.pick(len) < len);
            }
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = GameRng::new(7);
        for _ in 0..50 {
            assert!(rng.chance(1.0));
            assert!(!rng.chance(0.0));
        }
    }

    #[test]
    fn test_snapshot_restore() {
        let mut rng = GameRng::new(42);
        draws(&mut rng, 37);
        rng.chance(0.5);

        let snapshot = rng.snapshot();
        let expected = draws(&mut rng, 10);

        let mut restored = GameRng::restore(&snapshot);
        assert_eq!(draws(&mut restored, 10), expected);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameRng::new(9).snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(serde_json::from_str::<GameRngState>(&json).unwrap(), snapshot);
    }
}
