//! Single-game win detection.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Seat};

use super::moves::has_won;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// The winning seat.
    pub winner: Seat,
    /// Stakes at the end of the game.
    pub stakes: u32,
}

impl GameResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        self.winner == seat
    }
}

/// Check if the game is over.
///
/// Returns `Some(result)` once a seat has borne off all its checkers or
/// the opponent forfeited a double, `None` while the game continues.
#[must_use]
pub fn is_terminal(state: &GameState) -> Option<GameResult> {
    let winner = state
        .winner
        .or_else(|| Seat::all().find(|&seat| has_won(state, seat)))?;

    Some(GameResult {
        winner,
        stakes: state.stakes,
    })
}
