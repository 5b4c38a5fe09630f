//! Deterministic dice source for hosts.
//!
//! The rules engine never rolls dice itself: a `roll` command must carry
//! its values. `GameRng` is a convenience for hosts, simulations and tests
//! that need reproducible rolls.
//!
//! ```
//! use rust_backgammon::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut same = GameRng::new(42);
//!
//! assert_eq!(rng.roll(), same.roll());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::dice::{MAX_DIE, MIN_DIE};

/// Seeded dice roller.
///
/// Uses ChaCha8 for speed while keeping sequences reproducible across
/// platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new roller with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Roll a single die.
    pub fn die(&mut self) -> u8 {
        self.inner.gen_range(MIN_DIE..=MAX_DIE)
    }

    /// Roll two dice.
    pub fn roll(&mut self) -> [u8; 2] {
        [self.die(), self.die()]
    }

    /// Pick an index in `0..len`. Used by simulations choosing among
    /// generated actions.
    ///
    /// Returns `None` when `len` is zero.
    pub fn pick(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.inner.gen_range(0..len))
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable roller state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture and restore are O(1)
/// regardless of how many dice have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
