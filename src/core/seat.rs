//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! Backgammon is strictly two-player, so seats are a closed enum rather than
//! an open index. `White` travels from point 0 toward point 23, `Black`
//! travels the other way.
//!
//! ## SeatMap
//!
//! A fixed pair of values indexed by `Seat`. Used for per-point checker
//! counts, the bar and borne-off checkers.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    /// Seat 0. Moves low to high, bears off past point 23.
    White,
    /// Seat 1. Moves high to low, bears off past point 0.
    Black,
}

impl Seat {
    /// Both seats, in index order.
    pub const ALL: [Seat; 2] = [Seat::White, Seat::Black];

    /// Get the seat for a raw index (0 or 1).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::White),
            1 => Some(Seat::Black),
            _ => None,
        }
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::White => 0,
            Seat::Black => 1,
        }
    }

    /// The other seat. No seat is ever its own opponent.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Seat::White => Seat::Black,
            Seat::Black => Seat::White,
        }
    }

    /// Direction of travel along the track: +1 or -1.
    #[must_use]
    pub const fn direction(self) -> i8 {
        match self {
            Seat::White => 1,
            Seat::Black => -1,
        }
    }

    /// Iterate over both seats.
    pub fn all() -> impl Iterator<Item = Seat> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::White => write!(f, "white"),
            Seat::Black => write!(f, "black"),
        }
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use rust_backgammon::core::{Seat, SeatMap};
///
/// let mut bar: SeatMap<u8> = SeatMap::default();
/// bar[Seat::Black] += 1;
///
/// assert_eq!(bar[Seat::White], 0);
/// assert_eq!(bar[Seat::Black], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a map from the White and Black values.
    #[must_use]
    pub const fn new(white: T, black: T) -> Self {
        Self {
            data: [white, black],
        }
    }

    /// Create a map with values from a factory function.
    pub fn from_fn(factory: impl Fn(Seat) -> T) -> Self {
        Self::new(factory(Seat::White), factory(Seat::Black))
    }

    /// Get a reference to a seat's value.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's value.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::all().zip(self.data.iter())
    }
}

impl<T> From<[T; 2]> for SeatMap<T> {
    fn from(data: [T; 2]) -> Self {
        Self { data }
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
