//! Backgammon rules: the legality oracle, the command validator and win
//! detection.
//!
//! The validator and the reducer (`crate::events::fold`) must always be
//! used together: the reducer trusts that every event it sees was
//! produced by `validate` against the same state.

pub mod moves;
pub mod validate;
pub mod error;
pub mod result;

pub use moves::{can_bear_off, can_propose_double, generate_moves, has_won, MoveFilter};
pub use validate::validate;
pub use error::{CommandError, CubeViolationReason};
pub use result::{is_terminal, GameResult};
