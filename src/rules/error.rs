//! Command rejection reasons.
//!
//! Every rejection carries the offending command. A rejected command never
//! changes the game: no event is appended and no state is folded.

use thiserror::Error;

use crate::core::{Command, Status, MAX_STAKES};

/// Why a double could not be proposed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CubeViolationReason {
    #[error("doubling is not enabled for this game")]
    Disabled,
    #[error("stakes are already at the cap of {}", MAX_STAKES)]
    StakesCapped,
    #[error("the proposing seat does not hold the cube")]
    NotCubeHolder,
}

/// A rejected command.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Command type not permitted in the current status, or issued by a
    /// seat that may not respond to a double.
    #[error("{command} is not allowed while the game is {status}")]
    StatusViolation { command: Command, status: Status },

    /// Command is not among the generated legal actions.
    #[error("invalid command: {command}")]
    IllegalMove { command: Command },

    /// A roll supplied a value outside 1..=6.
    #[error("invalid dice {dice:?} in {command}")]
    InvalidDiceValue { command: Command, dice: [u8; 2] },

    /// Double proposed against the cube rules.
    #[error("{command} rejected: {reason}")]
    CubeViolation {
        command: Command,
        reason: CubeViolationReason,
    },
}

impl CommandError {
    /// The command that was rejected.
    #[must_use]
    pub fn command(&self) -> &Command {
        match self {
            CommandError::StatusViolation { command, .. }
            | CommandError::IllegalMove { command }
            | CommandError::InvalidDiceValue { command, .. }
            | CommandError::CubeViolation { command, .. } => command,
        }
    }
}
