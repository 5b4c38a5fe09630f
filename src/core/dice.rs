//! Remaining dice for the current turn.
//!
//! `Dice` is an immutable multiset: consuming a die returns a new value with
//! one matching entry removed. A rolled double expands to four entries, so
//! consumption must never be positional.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Smallest face value.
pub const MIN_DIE: u8 = 1;

/// Largest face value.
pub const MAX_DIE: u8 = 6;

/// True if `value` is a face of a six-sided die.
#[must_use]
pub const fn is_valid_die(value: u8) -> bool {
    value >= MIN_DIE && value <= MAX_DIE
}

/// Unconsumed dice values (0, 1, 2, 3 or 4 entries).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dice(SmallVec<[u8; 4]>);

impl Dice {
    /// No dice available.
    #[must_use]
    pub fn none() -> Self {
        Self(SmallVec::new())
    }

    /// Dice for a fresh roll. A double expands to four entries.
    ///
    /// Faces outside 1..=6 are dropped.
    #[must_use]
    pub fn rolled(a: u8, b: u8) -> Self {
        let faces: SmallVec<[u8; 4]> = if a == b {
            SmallVec::from_slice(&[a, a, a, a])
        } else {
            SmallVec::from_slice(&[a, b])
        };
        Self(faces.into_iter().filter(|&die| is_valid_die(die)).collect())
    }

    /// A copy with the first entry equal to `die` removed.
    ///
    /// Returns an unchanged copy if `die` is not available.
    #[must_use]
    pub fn without(&self, die: u8) -> Self {
        let mut remaining = self.0.clone();
        if let Some(pos) = remaining.iter().position(|&d| d == die) {
            remaining.remove(pos);
        }
        Self(remaining)
    }

    /// Distinct values, in first-seen order.
    #[must_use]
    pub fn distinct(&self) -> SmallVec<[u8; 4]> {
        let mut values: SmallVec<[u8; 4]> = SmallVec::new();
        for &die in &self.0 {
            if !values.contains(&die) {
                values.push(die);
            }
        }
        values
    }

    /// Check if a value is available.
    #[must_use]
    pub fn contains(&self, die: u8) -> bool {
        self.0.contains(&die)
    }

    /// Number of unconsumed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when every die has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The remaining values.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}
