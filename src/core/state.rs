//! Game state: the full board position plus turn and stakes bookkeeping.
//!
//! `GameState` is plain data. It is only ever produced by folding events
//! (see `crate::events::fold`), starting from `GameState::initial`.
//!
//! ## Invariants
//!
//! - For each seat, bar + off + checkers on points == 15.
//! - At most one seat has more than one checker on any point.
//! - `dice` is empty whenever `rolled` is false.

use serde::{Deserialize, Serialize};

use super::board::{in_bounds, Point, CHECKERS_PER_SEAT, POINT_COUNT};
use super::dice::Dice;
use super::seat::{Seat, SeatMap};

/// Highest stakes a double may reach.
pub const MAX_STAKES: u32 = 64;

/// Checker counts on a single point, indexed by seat.
pub type Slot = SeatMap<u8>;

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// No dice rolled yet.
    #[default]
    Pending,
    /// Normal play.
    Started,
    /// Waiting for the non-proposing seat to accept or forfeit.
    DoubleProposed,
    /// A seat has won. Terminal.
    Finished,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Status::Pending => "pending",
            Status::Started => "started",
            Status::DoubleProposed => "double-proposed",
            Status::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Ownership of the doubling cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cube {
    /// Either seat may propose the next double.
    Centered,
    /// Only this seat may propose the next double.
    Owned(Seat),
}

impl Cube {
    /// Check if `seat` may propose a double.
    #[must_use]
    pub fn may_propose(self, seat: Seat) -> bool {
        match self {
            Cube::Centered => true,
            Cube::Owned(owner) => owner == seat,
        }
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Seat whose turn it is (or who must respond to a double).
    pub up: Seat,

    /// Stakes multiplier. Starts at 1, doubles on each accepted proposal.
    pub stakes: u32,

    /// Lifecycle status.
    pub status: Status,

    /// Unconsumed dice for the current turn.
    pub dice: Dice,

    /// True once dice were rolled this turn, until the turn is committed.
    pub rolled: bool,

    /// Checkers waiting to re-enter.
    pub bar: SeatMap<u8>,

    /// Checkers borne off.
    pub off: SeatMap<u8>,

    /// The 24 track points.
    pub points: [Slot; POINT_COUNT],

    /// Doubling cube. `None` when doubling is disabled for this game.
    pub cube: Option<Cube>,

    /// Set once the game is finished.
    pub winner: Option<Seat>,
}

impl GameState {
    /// Standard opening position. White is up; nothing is rolled.
    #[must_use]
    pub fn initial(raise_stakes: bool) -> Self {
        let mut points = [Slot::default(); POINT_COUNT];
        for (point, white, black) in [
            (0, 2, 0),
            (5, 0, 5),
            (7, 0, 3),
            (11, 5, 0),
            (12, 0, 5),
            (16, 3, 0),
            (18, 5, 0),
            (23, 0, 2),
        ] {
            points[point] = Slot::new(white, black);
        }

        Self {
            up: Seat::White,
            stakes: 1,
            status: Status::Pending,
            dice: Dice::none(),
            rolled: false,
            bar: SeatMap::default(),
            off: SeatMap::default(),
            points,
            cube: raise_stakes.then_some(Cube::Centered),
            winner: None,
        }
    }

    /// A position with no checkers anywhere. Useful for composing
    /// custom positions; not consistent until checkers are placed.
    #[must_use]
    pub fn empty(raise_stakes: bool) -> Self {
        Self {
            points: [Slot::default(); POINT_COUNT],
            ..Self::initial(raise_stakes)
        }
    }

    /// Checker count for `seat` on a track point. Zero when out of bounds.
    #[must_use]
    pub fn count_at(&self, point: Point, seat: Seat) -> u8 {
        if in_bounds(point) {
            self.points[point as usize][seat]
        } else {
            0
        }
    }

    /// Total checkers a seat has on the track.
    #[must_use]
    pub fn on_points(&self, seat: Seat) -> u32 {
        self.points.iter().map(|slot| u32::from(slot[seat])).sum()
    }

    /// Bar + off + track checkers for a seat.
    #[must_use]
    pub fn checker_count(&self, seat: Seat) -> u32 {
        u32::from(self.bar[seat]) + u32::from(self.off[seat]) + self.on_points(seat)
    }

    /// Check the conservation and single-owner invariants.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let conserved = Seat::all()
            .all(|seat| self.checker_count(seat) == u32::from(CHECKERS_PER_SEAT));
        let single_owner = self
            .points
            .iter()
            .all(|slot| slot[Seat::White] <= 1 || slot[Seat::Black] <= 1);
        conserved && single_owner
    }

    /// Check if dice were rolled and some remain unconsumed.
    #[must_use]
    pub fn has_pending_dice(&self) -> bool {
        self.rolled && !self.dice.is_empty()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial(false)
    }
}
