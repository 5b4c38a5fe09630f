//! Legal action descriptors.
//!
//! An `Action` is what the move generator emits: a seat plus a fully
//! specified `ActionKind`. Moves carry their resolved target and whether
//! they hit a blot, so the validator can turn a matching command into an
//! event without recomputing anything.

use serde::{Deserialize, Serialize};

use super::board::Point;
use super::seat::Seat;

/// Type tag for actions and commands. Used for filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionType {
    Roll,
    Move,
    Enter,
    BearOff,
    Commit,
    ProposeDouble,
    Accept,
    Forfeit,
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionType::Roll => "roll",
            ActionType::Move => "move",
            ActionType::Enter => "enter",
            ActionType::BearOff => "bear-off",
            ActionType::Commit => "commit",
            ActionType::ProposeDouble => "propose-double",
            ActionType::Accept => "accept",
            ActionType::Forfeit => "forfeit",
        };
        f.write_str(name)
    }
}

/// What a legal action does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ActionKind {
    /// Roll the dice. Dice values are supplied with the command.
    Roll,
    /// Move a checker along the track.
    Move {
        from: Point,
        to: Point,
        die: u8,
        /// Target holds exactly one opposing checker.
        capture: bool,
    },
    /// Bring a checker in from the bar. `from` is the virtual entry point.
    Enter {
        from: Point,
        to: Point,
        die: u8,
        capture: bool,
    },
    /// Remove a checker from the home board.
    BearOff { from: Point, die: u8 },
    /// End the turn.
    Commit,
    /// Offer to double the stakes.
    ProposeDouble,
    /// Accept a proposed double.
    Accept,
    /// Decline a proposed double, conceding the game.
    Forfeit,
}

impl ActionKind {
    /// The type tag of this action.
    #[must_use]
    pub fn action_type(&self) -> ActionType {
        match self {
            ActionKind::Roll => ActionType::Roll,
            ActionKind::Move { .. } => ActionType::Move,
            ActionKind::Enter { .. } => ActionType::Enter,
            ActionKind::BearOff { .. } => ActionType::BearOff,
            ActionKind::Commit => ActionType::Commit,
            ActionKind::ProposeDouble => ActionType::ProposeDouble,
            ActionKind::Accept => ActionType::Accept,
            ActionKind::Forfeit => ActionType::Forfeit,
        }
    }
}

/// A legal action for a seat.
///
/// ## Example
///
/// ```
/// use rust_backgammon::core::{Action, ActionKind, ActionType, Seat};
///
/// let action = Action::new(Seat::White, ActionKind::Move { from: 0, to: 3, die: 3, capture: false });
/// assert_eq!(action.action_type(), ActionType::Move);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// The seat that may take this action.
    pub seat: Seat,

    /// What the action does.
    #[serde(flatten)]
    pub kind: ActionKind,
}

impl Action {
    /// Create an action.
    #[must_use]
    pub const fn new(seat: Seat, kind: ActionKind) -> Self {
        Self { seat, kind }
    }

    /// The type tag of this action.
    #[must_use]
    pub fn action_type(&self) -> ActionType {
        self.kind.action_type()
    }

    /// Die consumed by this action, if any.
    #[must_use]
    pub fn die(&self) -> Option<u8> {
        match self.kind {
            ActionKind::Move { die, .. }
            | ActionKind::Enter { die, .. }
            | ActionKind::BearOff { die, .. } => Some(die),
            _ => None,
        }
    }

    /// True for moves and entries that hit a blot.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        matches!(
            self.kind,
            ActionKind::Move { capture: true, .. } | ActionKind::Enter { capture: true, .. }
        )
    }
}
