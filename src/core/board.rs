//! Board geometry: bounds, bar entry and home ranges, parameterized by seat.
//!
//! The track is 24 points, indexed 0..=23. Positions outside that range
//! are meaningful: one bound past either end is the virtual point a seat
//! enters from when leaving the bar, and anything past a seat's far end is
//! "off the board" (a bear-off target).

use std::ops::Range;

use super::seat::Seat;

/// A position on (or just off) the track.
pub type Point = i8;

/// Number of points on the track.
pub const POINT_COUNT: usize = 24;

/// Checkers each seat starts with.
pub const CHECKERS_PER_SEAT: u8 = 15;

/// Number of points in a home board.
pub const HOME_SIZE: usize = 6;

/// Direction of travel for a seat: +1 for White, -1 for Black.
#[must_use]
pub const fn direction(seat: Seat) -> i8 {
    seat.direction()
}

/// The other seat.
#[must_use]
pub const fn opponent(seat: Seat) -> Seat {
    seat.opponent()
}

/// True if `point` is a track point (0..=23).
#[must_use]
pub const fn in_bounds(point: Point) -> bool {
    point >= 0 && (point as usize) < POINT_COUNT
}

/// Virtual point a seat's checkers enter from when leaving the bar.
///
/// One bound past the end of the track the seat starts from, so that
/// `bar_entry_point(seat) + die * direction(seat)` lands in the
/// opponent's home board.
#[must_use]
pub const fn bar_entry_point(seat: Seat) -> Point {
    match seat {
        Seat::White => -1,
        Seat::Black => POINT_COUNT as Point,
    }
}

/// Target of moving `die` pips from `from`. May be out of bounds.
///
/// Computed wide and clamped to the `Point` range, so any die value gives
/// an off-track result rather than overflowing.
#[must_use]
pub const fn target(seat: Seat, from: Point, die: u8) -> Point {
    narrow(from as i16 + die as i16 * seat.direction() as i16)
}

const fn narrow(point: i16) -> Point {
    if point < Point::MIN as i16 {
        Point::MIN
    } else if point > Point::MAX as i16 {
        Point::MAX
    } else {
        point as Point
    }
}

/// The six points nearest a seat's bear-off edge.
#[must_use]
pub fn home_range(seat: Seat) -> Range<usize> {
    match seat {
        Seat::White => POINT_COUNT - HOME_SIZE..POINT_COUNT,
        Seat::Black => 0..HOME_SIZE,
    }
}

/// The eighteen points outside a seat's home board.
#[must_use]
pub fn outer_range(seat: Seat) -> Range<usize> {
    match seat {
        Seat::White => 0..POINT_COUNT - HOME_SIZE,
        Seat::Black => HOME_SIZE..POINT_COUNT,
    }
}

/// The home point from which exactly `die` pips bear a checker off.
#[must_use]
pub const fn exact_bear_off_point(seat: Seat, die: u8) -> Point {
    match seat {
        Seat::White => narrow(POINT_COUNT as i16 - die as i16),
        Seat::Black => narrow(die as i16 - 1),
    }
}

/// Pips a checker on `point` needs to bear off.
#[must_use]
pub const fn pips_to_off(seat: Seat, point: Point) -> i8 {
    match seat {
        Seat::White => POINT_COUNT as Point - point,
        Seat::Black => point + 1,
    }
}
