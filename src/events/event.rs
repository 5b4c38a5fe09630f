//! Game event types.
//!
//! Events are the past-tense, canonical record of accepted commands. They
//! are fully resolved: a move records its target and whether it hit, a
//! roll records its dice. Replaying events never needs to re-derive
//! anything from the position.
//!
//! Bearing off is recorded as `Moved` with an off-board `to`.

use serde::{Deserialize, Serialize};

use crate::core::{Point, Seat};

/// An accepted, applied game event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Event {
    /// Dice rolled. Doubles are expanded when folded, not here.
    Rolled { seat: Seat, dice: [u8; 2] },

    /// A checker moved along the track or off the board.
    Moved {
        seat: Seat,
        from: Point,
        to: Point,
        die: u8,
        capture: bool,
    },

    /// A checker entered from the bar.
    Entered {
        seat: Seat,
        from: Point,
        to: Point,
        die: u8,
        capture: bool,
    },

    /// Turn ended.
    Committed { seat: Seat },

    /// `seat` offered to double the stakes.
    DoubleProposed { seat: Seat },

    /// `seat` accepted the double and now holds the cube.
    Accepted { seat: Seat },

    /// `seat` declined the double and lost.
    Forfeited { seat: Seat },

    /// A record this version does not understand. Folds as a no-op.
    #[serde(other)]
    Unknown,
}

impl Event {
    /// The seat that caused the event.
    #[must_use]
    pub fn seat(&self) -> Option<Seat> {
        match *self {
            Event::Rolled { seat, .. }
            | Event::Moved { seat, .. }
            | Event::Entered { seat, .. }
            | Event::Committed { seat }
            | Event::DoubleProposed { seat }
            | Event::Accepted { seat }
            | Event::Forfeited { seat } => Some(seat),
            Event::Unknown => None,
        }
    }

    /// True for moves and entries that sent an opposing checker to the bar.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        matches!(
            self,
            Event::Moved { capture: true, .. } | Event::Entered { capture: true, .. }
        )
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Event::Rolled { seat, dice } => write!(f, "{seat} rolled {}-{}", dice[0], dice[1]),
            Event::Moved { seat, from, to, die, capture } => {
                if crate::core::board::in_bounds(to) {
                    write!(f, "{seat} moved {from} to {to} with {die}")?;
                } else {
                    write!(f, "{seat} bore off from {from} with {die}")?;
                }
                if capture {
                    write!(f, ", hitting")?;
                }
                Ok(())
            }
            Event::Entered { seat, to, die, capture, .. } => {
                write!(f, "{seat} entered at {to} with {die}")?;
                if capture {
                    write!(f, ", hitting")?;
                }
                Ok(())
            }
            Event::Committed { seat } => write!(f, "{seat} committed"),
            Event::DoubleProposed { seat } => write!(f, "{seat} proposed a double"),
            Event::Accepted { seat } => write!(f, "{seat} accepted the double"),
            Event::Forfeited { seat } => write!(f, "{seat} forfeited"),
            Event::Unknown => write!(f, "unknown event"),
        }
    }
}
