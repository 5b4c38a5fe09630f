//! Legal action generation.
//!
//! `generate_moves` is the legality oracle: given a state it produces every
//! legal action for the requested seats, in a stable order. The validator
//! accepts a command only if it matches one of these, so generation must
//! be exhaustive and exact.
//!
//! ## Precedence (per seat)
//!
//! 1. Either seat has borne off all 15: nothing.
//! 2. Double proposed: the responder (who is `up`) may accept or forfeit.
//! 3. Not this seat's turn: nothing.
//! 4. Dice not rolled: roll, plus propose-double when the cube allows it.
//! 5. Checkers on the bar: only bar entries.
//! 6. Bear-off eligible: bear-offs and moves within the home board.
//! 7. Otherwise: regular moves from any occupied point.
//! 8. Rolled with nothing playable (or nothing left): commit only.
//!
//! Dice values are deduplicated before iterating; a double offers each
//! (point, value) pair once. Consumption, not generation, tracks how many
//! times a value remains usable.

use smallvec::SmallVec;

use crate::core::board::{
    bar_entry_point, exact_bear_off_point, home_range, in_bounds, outer_range, pips_to_off, target,
    CHECKERS_PER_SEAT, POINT_COUNT,
};
use crate::core::{Action, ActionKind, ActionType, GameState, Point, Seat, Status, MAX_STAKES};

/// Restricts which seats and action types `generate_moves` reports.
///
/// The default considers only the seat that is up, and every action type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveFilter {
    /// Seats to generate for. `None` means the seat that is up.
    pub seats: Option<SmallVec<[Seat; 2]>>,

    /// Action types to keep. `None` keeps all.
    pub types: Option<SmallVec<[ActionType; 2]>>,
}

impl MoveFilter {
    /// Up seat, all types.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Both seats, all types.
    #[must_use]
    pub fn both_seats() -> Self {
        Self::new().with_seat(Seat::White).with_seat(Seat::Black)
    }

    /// Add a seat to consider.
    #[must_use]
    pub fn with_seat(mut self, seat: Seat) -> Self {
        let seats = self.seats.get_or_insert_with(SmallVec::new);
        if !seats.contains(&seat) {
            seats.push(seat);
        }
        self
    }

    /// Add an action type to keep.
    #[must_use]
    pub fn with_type(mut self, action_type: ActionType) -> Self {
        let types = self.types.get_or_insert_with(SmallVec::new);
        if !types.contains(&action_type) {
            types.push(action_type);
        }
        self
    }

    /// Filter for a single seat and action type, as the validator uses.
    #[must_use]
    pub fn exact(seat: Seat, action_type: ActionType) -> Self {
        Self::new().with_seat(seat).with_type(action_type)
    }

    fn keeps(&self, action: &Action) -> bool {
        self.types
            .as_ref()
            .map_or(true, |types| types.contains(&action.action_type()))
    }
}

/// Check if a seat has borne off every checker.
#[must_use]
pub fn has_won(state: &GameState, seat: Seat) -> bool {
    state.off[seat] >= CHECKERS_PER_SEAT
}

/// Check if a seat may bear off: nothing on the bar, nothing outside home.
#[must_use]
pub fn can_bear_off(state: &GameState, seat: Seat) -> bool {
    state.bar[seat] == 0 && outer_range(seat).all(|point| state.points[point][seat] == 0)
}

/// Check if a seat may propose a double right now (ignoring whose turn it is).
#[must_use]
pub fn can_propose_double(state: &GameState, seat: Seat) -> bool {
    state.stakes < MAX_STAKES && state.cube.is_some_and(|cube| cube.may_propose(seat))
}

/// Every legal action for the seats selected by `filter`.
#[must_use]
pub fn generate_moves(state: &GameState, filter: &MoveFilter) -> Vec<Action> {
    let seats = filter
        .seats
        .clone()
        .unwrap_or_else(|| SmallVec::from_slice(&[state.up]));

    seats
        .into_iter()
        .flat_map(|seat| seat_moves(state, seat))
        .filter(|action| filter.keeps(action))
        .collect()
}

fn seat_moves(state: &GameState, seat: Seat) -> Vec<Action> {
    if Seat::all().any(|s| has_won(state, s)) || state.status == Status::Finished {
        return Vec::new();
    }

    if state.status == Status::DoubleProposed {
        return if seat == state.up {
            vec![
                Action::new(seat, ActionKind::Accept),
                Action::new(seat, ActionKind::Forfeit),
            ]
        } else {
            Vec::new()
        };
    }

    if seat != state.up {
        return Vec::new();
    }

    if !state.rolled {
        let mut actions = vec![Action::new(seat, ActionKind::Roll)];
        if can_propose_double(state, seat) {
            actions.push(Action::new(seat, ActionKind::ProposeDouble));
        }
        return actions;
    }

    let checker_moves = if !state.has_pending_dice() {
        Vec::new()
    } else if state.bar[seat] > 0 {
        bar_entries(state, seat)
    } else if can_bear_off(state, seat) {
        home_moves(state, seat)
    } else {
        regular_moves(state, seat)
    };

    if checker_moves.is_empty() {
        // Every die used, or blocked with dice pending.
        return vec![Action::new(seat, ActionKind::Commit)];
    }

    checker_moves
}

/// Target is on the track and not blocked by two or more opposing checkers.
fn open(state: &GameState, seat: Seat, to: Point) -> bool {
    in_bounds(to) && state.points[to as usize][seat.opponent()] <= 1
}

/// Target holds exactly one opposing checker.
fn blot(state: &GameState, seat: Seat, to: Point) -> bool {
    in_bounds(to) && state.points[to as usize][seat.opponent()] == 1
}

fn bar_entries(state: &GameState, seat: Seat) -> Vec<Action> {
    let from = bar_entry_point(seat);
    state
        .dice
        .distinct()
        .into_iter()
        .filter_map(|die| {
            let to = target(seat, from, die);
            open(state, seat, to).then(|| {
                Action::new(
                    seat,
                    ActionKind::Enter { from, to, die, capture: blot(state, seat, to) },
                )
            })
        })
        .collect()
}

fn regular_moves(state: &GameState, seat: Seat) -> Vec<Action> {
    let mut actions = Vec::new();
    for die in state.dice.distinct() {
        for point in 0..POINT_COUNT {
            if state.points[point][seat] == 0 {
                continue;
            }
            let from = point as Point;
            let to = target(seat, from, die);
            if open(state, seat, to) {
                actions.push(Action::new(
                    seat,
                    ActionKind::Move { from, to, die, capture: blot(state, seat, to) },
                ));
            }
        }
    }
    actions
}

/// Occupied home point farthest from bearing off.
fn farthest_occupied(state: &GameState, seat: Seat) -> Option<Point> {
    home_range(seat)
        .filter(|&point| state.points[point][seat] > 0)
        .map(|point| point as Point)
        .max_by_key(|&point| pips_to_off(seat, point))
}

fn home_moves(state: &GameState, seat: Seat) -> Vec<Action> {
    let farthest = farthest_occupied(state, seat);
    let mut actions = Vec::new();

    for die in state.dice.distinct() {
        for point in home_range(seat) {
            if state.points[point][seat] == 0 {
                continue;
            }
            let from = point as Point;
            let to = target(seat, from, die);

            if !in_bounds(to) {
                // Exact bear-off, or overage from the rearmost checker.
                if from == exact_bear_off_point(seat, die) || Some(from) == farthest {
                    actions.push(Action::new(seat, ActionKind::BearOff { from, die }));
                }
            } else if open(state, seat, to) {
                actions.push(Action::new(
                    seat,
                    ActionKind::Move { from, to, die, capture: blot(state, seat, to) },
                ));
            }
        }
    }
    actions
}
