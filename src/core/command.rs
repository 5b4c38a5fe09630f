//! Commands: externally proposed actions.
//!
//! A command is what a host submits. It may carry incidental data the
//! legality check ignores (an identifier, dice values for a roll) and may
//! leave derivable fields out (a move's `to`). `Command::matches` compares
//! a command against a generated `Action` modulo those differences.

use serde::{Deserialize, Serialize};

use super::action::{Action, ActionKind, ActionType};
use super::board::Point;
use super::seat::Seat;

/// What a command asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CommandKind {
    /// Roll with caller-supplied dice.
    Roll { dice: [u8; 2] },
    Move {
        from: Point,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<Point>,
        die: u8,
    },
    Enter {
        from: Point,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<Point>,
        die: u8,
    },
    BearOff { from: Point, die: u8 },
    Commit,
    ProposeDouble,
    Accept,
    Forfeit,
}

impl CommandKind {
    /// The type tag of this command.
    #[must_use]
    pub fn action_type(&self) -> ActionType {
        match self {
            CommandKind::Roll { .. } => ActionType::Roll,
            CommandKind::Move { .. } => ActionType::Move,
            CommandKind::Enter { .. } => ActionType::Enter,
            CommandKind::BearOff { .. } => ActionType::BearOff,
            CommandKind::Commit => ActionType::Commit,
            CommandKind::ProposeDouble => ActionType::ProposeDouble,
            CommandKind::Accept => ActionType::Accept,
            CommandKind::Forfeit => ActionType::Forfeit,
        }
    }
}

/// A command issued on behalf of a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Command {
    /// Caller-assigned identifier. Ignored by validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The seat issuing the command.
    pub seat: Seat,

    #[serde(flatten)]
    pub kind: CommandKind,
}

impl Command {
    /// Create a command with no identifier.
    #[must_use]
    pub const fn new(seat: Seat, kind: CommandKind) -> Self {
        Self { id: None, seat, kind }
    }

    /// Attach a caller identifier.
    #[must_use]
    pub const fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Roll the given dice.
    #[must_use]
    pub const fn roll(seat: Seat, dice: [u8; 2]) -> Self {
        Self::new(seat, CommandKind::Roll { dice })
    }

    /// Move a checker; the target is derived from `from` and `die`.
    #[must_use]
    pub const fn move_checker(seat: Seat, from: Point, die: u8) -> Self {
        Self::new(seat, CommandKind::Move { from, to: None, die })
    }

    /// Enter a checker from the bar.
    #[must_use]
    pub const fn enter(seat: Seat, from: Point, die: u8) -> Self {
        Self::new(seat, CommandKind::Enter { from, to: None, die })
    }

    /// Bear a checker off.
    #[must_use]
    pub const fn bear_off(seat: Seat, from: Point, die: u8) -> Self {
        Self::new(seat, CommandKind::BearOff { from, die })
    }

    #[must_use]
    pub const fn commit(seat: Seat) -> Self {
        Self::new(seat, CommandKind::Commit)
    }

    #[must_use]
    pub const fn propose_double(seat: Seat) -> Self {
        Self::new(seat, CommandKind::ProposeDouble)
    }

    #[must_use]
    pub const fn accept(seat: Seat) -> Self {
        Self::new(seat, CommandKind::Accept)
    }

    #[must_use]
    pub const fn forfeit(seat: Seat) -> Self {
        Self::new(seat, CommandKind::Forfeit)
    }

    /// Turn a generated action back into a command.
    ///
    /// `dice` is only used when the action is a roll.
    #[must_use]
    pub fn from_action(action: &Action, dice: [u8; 2]) -> Self {
        let kind = match action.kind {
            ActionKind::Roll => CommandKind::Roll { dice },
            ActionKind::Move { from, to, die, .. } => CommandKind::Move { from, to: Some(to), die },
            ActionKind::Enter { from, to, die, .. } => CommandKind::Enter { from, to: Some(to), die },
            ActionKind::BearOff { from, die } => CommandKind::BearOff { from, die },
            ActionKind::Commit => CommandKind::Commit,
            ActionKind::ProposeDouble => CommandKind::ProposeDouble,
            ActionKind::Accept => CommandKind::Accept,
            ActionKind::Forfeit => CommandKind::Forfeit,
        };
        Self::new(action.seat, kind)
    }

    /// The type tag of this command.
    #[must_use]
    pub fn action_type(&self) -> ActionType {
        self.kind.action_type()
    }

    /// Check if this command requests exactly `action`.
    ///
    /// Ignores the identifier, roll dice and the capture flag. An omitted
    /// `to` matches any target; a supplied one must agree.
    #[must_use]
    pub fn matches(&self, action: &Action) -> bool {
        if self.seat != action.seat {
            return false;
        }
        match (self.kind, action.kind) {
            (CommandKind::Roll { .. }, ActionKind::Roll)
            | (CommandKind::Commit, ActionKind::Commit)
            | (CommandKind::ProposeDouble, ActionKind::ProposeDouble)
            | (CommandKind::Accept, ActionKind::Accept)
            | (CommandKind::Forfeit, ActionKind::Forfeit) => true,
            (
                CommandKind::Move { from, to, die },
                ActionKind::Move { from: a_from, to: a_to, die: a_die, .. },
            )
            | (
                CommandKind::Enter { from, to, die },
                ActionKind::Enter { from: a_from, to: a_to, die: a_die, .. },
            ) => from == a_from && die == a_die && to.map_or(true, |to| to == a_to),
            (
                CommandKind::BearOff { from, die },
                ActionKind::BearOff { from: a_from, die: a_die },
            ) => from == a_from && die == a_die,
            _ => false,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.seat, self.action_type())?;
        match self.kind {
            CommandKind::Roll { dice } => write!(f, " {}-{}", dice[0], dice[1]),
            CommandKind::Move { from, to, die } | CommandKind::Enter { from, to, die } => {
                write!(f, " from {from}")?;
                if let Some(to) = to {
                    write!(f, " to {to}")?;
                }
                write!(f, " with {die}")
            }
            CommandKind::BearOff { from, die } => write!(f, " from {from} with {die}"),
            _ => Ok(()),
        }
    }
}
