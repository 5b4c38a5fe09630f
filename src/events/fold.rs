//! The event reducer.
//!
//! `fold` is a pure, total function from (state, event) to the next state.
//! It performs no legality checks: only events produced by the validator
//! may reach it. Counts use saturating arithmetic so that even a corrupt
//! log folds to some state instead of panicking.

use crate::core::board::{in_bounds, CHECKERS_PER_SEAT};
use crate::core::{Cube, Dice, GameState, Point, Seat, Status};

use super::event::Event;

/// Apply one event to a state.
#[must_use]
pub fn fold(state: &GameState, event: &Event) -> GameState {
    tracing::trace!(event = %event, "folding event");

    match *event {
        Event::Rolled { dice: [a, b], .. } => rolled(state, a, b),
        Event::Moved { seat, from, to, die, .. } | Event::Entered { seat, from, to, die, .. } => {
            moved(state, seat, from, to, die)
        }
        Event::Committed { .. } => committed(state),
        Event::DoubleProposed { .. } => double_proposed(state),
        Event::Accepted { seat } => accepted(state, seat),
        Event::Forfeited { seat } => forfeited(state, seat),
        Event::Unknown => state.clone(),
    }
}

/// Fold a sequence of events over `base`.
#[must_use]
pub fn replay<'a>(base: &GameState, events: impl IntoIterator<Item = &'a Event>) -> GameState {
    events
        .into_iter()
        .fold(base.clone(), |state, event| fold(&state, event))
}

fn rolled(state: &GameState, a: u8, b: u8) -> GameState {
    GameState {
        status: Status::Started,
        rolled: true,
        dice: Dice::rolled(a, b),
        ..state.clone()
    }
}

fn moved(state: &GameState, seat: Seat, from: Point, to: Point, die: u8) -> GameState {
    let mut next = state.clone();
    let opponent = seat.opponent();

    if in_bounds(from) {
        let source = &mut next.points[from as usize][seat];
        *source = source.saturating_sub(1);
    } else {
        next.bar[seat] = next.bar[seat].saturating_sub(1);
    }

    if in_bounds(to) {
        let target = &mut next.points[to as usize];
        if target[opponent] == 1 {
            target[opponent] = 0;
            next.bar[opponent] = next.bar[opponent].saturating_add(1);
        }
        target[seat] = target[seat].saturating_add(1);
    } else {
        next.off[seat] = next.off[seat].saturating_add(1);
        if next.off[seat] >= CHECKERS_PER_SEAT {
            next.status = Status::Finished;
            next.winner = Some(seat);
        }
    }

    next.dice = state.dice.without(die);
    next
}

fn committed(state: &GameState) -> GameState {
    GameState {
        up: state.up.opponent(),
        rolled: false,
        dice: Dice::none(),
        status: Status::Started,
        ..state.clone()
    }
}

fn double_proposed(state: &GameState) -> GameState {
    GameState {
        status: Status::DoubleProposed,
        up: state.up.opponent(),
        ..state.clone()
    }
}

fn accepted(state: &GameState, seat: Seat) -> GameState {
    GameState {
        stakes: state.stakes.saturating_mul(2),
        cube: Some(Cube::Owned(seat)),
        status: Status::Started,
        ..state.clone()
    }
}

fn forfeited(state: &GameState, seat: Seat) -> GameState {
    GameState {
        status: Status::Finished,
        winner: Some(seat.opponent()),
        ..state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Slot;

    #[test]
    fn test_rolled_expands_doubles() {
        let state = GameState::initial(false);
        let next = fold(&state, &Event::Rolled { seat: Seat::White, dice: [5, 5] });

        assert_eq!(next.status, Status::Started);
        assert!(next.rolled);
        assert_eq!(next.dice.as_slice(), &[5, 5, 5, 5]);
    }

    #[test]
    fn test_moved_plain() {
        let state = fold(&GameState::initial(false), &Event::Rolled { seat: Seat::White, dice: [3, 5] });
        let next = fold(
            &state,
            &Event::Moved { seat: Seat::White, from: 11, to: 16, die: 5, capture: false },
        );

        assert_eq!(next.points[11], Slot::new(4, 0));
        assert_eq!(next.points[16], Slot::new(4, 0));
        assert_eq!(next.dice.as_slice(), &[3]);
        assert_eq!(next.bar, state.bar);
        assert!(next.is_consistent());
    }

    #[test]
    fn test_moved_capture() {
        let mut state = GameState::initial(false);
        state.points[5] = Slot::new(0, 4);
        state.points[3] = Slot::new(0, 1);
        state.dice = Dice::rolled(3, 1);
        state.rolled = true;

        let next = fold(
            &state,
            &Event::Moved { seat: Seat::White, from: 0, to: 3, die: 3, capture: true },
        );

        assert_eq!(next.points[3], Slot::new(1, 0));
        assert_eq!(next.bar[Seat::Black], 1);
        assert!(next.is_consistent());
    }

    #[test]
    fn test_entered_from_bar() {
        let mut state = GameState::initial(false);
        state.points[0][Seat::White] = 1;
        state.bar[Seat::White] = 1;
        state.dice = Dice::rolled(2, 6);
        state.rolled = true;

        let next = fold(
            &state,
            &Event::Entered { seat: Seat::White, from: -1, to: 1, die: 2, capture: false },
        );

        assert_eq!(next.bar[Seat::White], 0);
        assert_eq!(next.points[1][Seat::White], 1);
        assert_eq!(next.dice.as_slice(), &[6]);
        assert!(next.is_consistent());
    }

    #[test]
    fn test_bearing_off_last_checker_finishes() {
        let mut state = GameState::empty(false);
        state.points[23][Seat::White] = 1;
        state.off[Seat::White] = 14;
        state.points[0][Seat::Black] = 15;
        state.status = Status::Started;
        state.dice = Dice::rolled(1, 2);
        state.rolled = true;

        let next = fold(
            &state,
            &Event::Moved { seat: Seat::White, from: 23, to: 24, die: 1, capture: false },
        );

        assert_eq!(next.off[Seat::White], 15);
        assert_eq!(next.status, Status::Finished);
        assert_eq!(next.winner, Some(Seat::White));
        assert!(next.is_consistent());
    }

    #[test]
    fn test_committed() {
        let state = fold(&GameState::initial(false), &Event::Rolled { seat: Seat::White, dice: [3, 5] });
        let next = fold(&state, &Event::Committed { seat: Seat::White });

        assert_eq!(next.up, Seat::Black);
        assert!(!next.rolled);
        assert!(next.dice.is_empty());
        assert_eq!(next.status, Status::Started);
    }

    #[test]
    fn test_double_proposed_and_accepted() {
        let state = GameState::initial(true);
        let proposed = fold(&state, &Event::DoubleProposed { seat: Seat::White });

        assert_eq!(proposed.status, Status::DoubleProposed);
        assert_eq!(proposed.up, Seat::Black);

        let accepted = fold(&proposed, &Event::Accepted { seat: Seat::Black });
        assert_eq!(accepted.stakes, 2);
        assert_eq!(accepted.cube, Some(Cube::Owned(Seat::Black)));
        assert_eq!(accepted.status, Status::Started);
    }

    #[test]
    fn test_forfeited() {
        let state = fold(&GameState::initial(true), &Event::DoubleProposed { seat: Seat::White });
        let next = fold(&state, &Event::Forfeited { seat: Seat::Black });

        assert_eq!(next.status, Status::Finished);
        assert_eq!(next.winner, Some(Seat::White));
    }

    #[test]
    fn test_unknown_is_noop() {
        let state = GameState::initial(false);
        assert_eq!(fold(&state, &Event::Unknown), state);
    }

    #[test]
    fn test_corrupt_log_saturates() {
        let entries = vec![
            Event::Entered { seat: Seat::White, from: -1, to: 0, die: 1, capture: false };
            300
        ];
        let state = replay(&GameState::initial(false), &entries);
        assert_eq!(state.points[0][Seat::White], u8::MAX);
        assert_eq!(state.bar[Seat::White], 0);

        let hits = vec![
            Event::Moved { seat: Seat::White, from: 0, to: 23, die: 1, capture: true };
            300
        ];
        let mut base = GameState::initial(false);
        base.points[23] = Slot::new(0, 1);
        let state = replay(&base, &hits);
        assert_eq!(state.bar[Seat::Black], 1);
        assert_eq!(state.points[23][Seat::White], u8::MAX);

        let bear_offs = vec![
            Event::Moved { seat: Seat::Black, from: 0, to: -1, die: 1, capture: false };
            300
        ];
        let state = replay(&GameState::initial(false), &bear_offs);
        assert_eq!(state.off[Seat::Black], u8::MAX);
        assert_eq!(state.winner, Some(Seat::Black));
    }

    #[test]
    fn test_rolled_drops_invalid_dice() {
        let state = fold(&GameState::initial(false), &Event::Rolled { seat: Seat::Black, dice: [130, 1] });
        assert_eq!(state.dice.as_slice(), &[1]);
        assert!(state.rolled);
    }

    #[test]
    fn test_replay() {
        let events = [
            Event::Rolled { seat: Seat::White, dice: [6, 5] },
            Event::Moved { seat: Seat::White, from: 0, to: 6, die: 6, capture: false },
            Event::Moved { seat: Seat::White, from: 6, to: 11, die: 5, capture: false },
            Event::Committed { seat: Seat::White },
        ];

        let state = replay(&GameState::initial(false), &events);

        assert_eq!(state.up, Seat::Black);
        assert_eq!(state.points[0][Seat::White], 1);
        assert_eq!(state.points[11][Seat::White], 6);
        assert!(state.is_consistent());
    }
}
