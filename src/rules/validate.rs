//! Command validation.
//!
//! `validate` is the gate between callers and the reducer. It re-derives
//! the legal actions for the command's seat and type and accepts the
//! command only if one of them matches. On success it returns the
//! canonical event, with every derived field resolved.
//!
//! Checks run in order: status gate, cube rules (for `propose-double`),
//! membership in the generated set, dice range (for `roll`).

use crate::core::board::target;
use crate::core::dice::is_valid_die;
use crate::core::{Action, ActionKind, ActionType, Command, CommandKind, GameState, Status, MAX_STAKES};
use crate::events::Event;

use super::error::{CommandError, CubeViolationReason};
use super::moves::{generate_moves, MoveFilter};

/// Validate a command against a state and derive its event.
///
/// Never modifies anything; the caller folds the returned event.
pub fn validate(state: &GameState, command: &Command) -> Result<Event, CommandError> {
    check_status(state, command)?;

    if command.action_type() == ActionType::ProposeDouble {
        check_cube(state, command)?;
    }

    let legal = generate_moves(state, &MoveFilter::exact(command.seat, command.action_type()));
    let action = legal
        .iter()
        .find(|action| command.matches(action))
        .ok_or(CommandError::IllegalMove { command: *command })?;

    if let CommandKind::Roll { dice } = command.kind {
        if !dice.iter().all(|&die| is_valid_die(die)) {
            return Err(CommandError::InvalidDiceValue {
                command: *command,
                dice,
            });
        }
    }

    to_event(action, command).ok_or(CommandError::IllegalMove { command: *command })
}

fn check_status(state: &GameState, command: &Command) -> Result<(), CommandError> {
    let action_type = command.action_type();
    let allowed = match state.status {
        Status::Pending => matches!(action_type, ActionType::Roll | ActionType::ProposeDouble),
        Status::Started => {
            !matches!(action_type, ActionType::Accept | ActionType::Forfeit)
                && !(action_type == ActionType::Roll && state.rolled)
        }
        Status::DoubleProposed => {
            matches!(action_type, ActionType::Accept | ActionType::Forfeit)
                && command.seat == state.up
        }
        Status::Finished => false,
    };

    if allowed {
        Ok(())
    } else {
        Err(CommandError::StatusViolation {
            command: *command,
            status: state.status,
        })
    }
}

fn check_cube(state: &GameState, command: &Command) -> Result<(), CommandError> {
    let reason = match state.cube {
        None => Some(CubeViolationReason::Disabled),
        Some(_) if state.stakes >= MAX_STAKES => Some(CubeViolationReason::StakesCapped),
        Some(cube) if !cube.may_propose(command.seat) => Some(CubeViolationReason::NotCubeHolder),
        Some(_) => None,
    };

    match reason {
        Some(reason) => Err(CommandError::CubeViolation {
            command: *command,
            reason,
        }),
        None => Ok(()),
    }
}

/// Canonical event for a matched action. `None` if a roll action is paired
/// with anything but a roll command.
fn to_event(action: &Action, command: &Command) -> Option<Event> {
    let seat = action.seat;
    let event = match (action.kind, command.kind) {
        (ActionKind::Roll, CommandKind::Roll { dice }) => Event::Rolled { seat, dice },
        (ActionKind::Roll, _) => return None,
        (ActionKind::Move { from, to, die, capture }, _) => Event::Moved { seat, from, to, die, capture },
        (ActionKind::Enter { from, to, die, capture }, _) => Event::Entered { seat, from, to, die, capture },
        (ActionKind::BearOff { from, die }, _) => Event::Moved {
            seat,
            from,
            to: target(seat, from, die),
            die,
            capture: false,
        },
        (ActionKind::Commit, _) => Event::Committed { seat },
        (ActionKind::ProposeDouble, _) => Event::DoubleProposed { seat },
        (ActionKind::Accept, _) => Event::Accepted { seat },
        (ActionKind::Forfeit, _) => Event::Forfeited { seat },
    };
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cube, Seat};

    #[test]
    fn test_roll_produces_rolled() {
        let state = GameState::initial(false);
        let event = validate(&state, &Command::roll(Seat::White, [3, 1])).unwrap();

        assert_eq!(event, Event::Rolled { seat: Seat::White, dice: [3, 1] });
    }

    #[test]
    fn test_to_event_pairs_roll_with_roll_only() {
        let roll = Action::new(Seat::White, ActionKind::Roll);

        assert_eq!(
            to_event(&roll, &Command::roll(Seat::White, [2, 5])),
            Some(Event::Rolled { seat: Seat::White, dice: [2, 5] })
        );
        assert_eq!(to_event(&roll, &Command::commit(Seat::White)), None);

        let commit = Action::new(Seat::White, ActionKind::Commit);
        assert_eq!(
            to_event(&commit, &Command::commit(Seat::White)),
            Some(Event::Committed { seat: Seat::White })
        );
    }

    #[test]
    fn test_roll_out_of_turn_is_illegal() {
        let state = GameState::initial(false);
        let err = validate(&state, &Command::roll(Seat::Black, [3, 1])).unwrap_err();

        assert!(matches!(err, CommandError::IllegalMove { .. }));
    }

    #[test]
    fn test_invalid_dice() {
        let state = GameState::initial(false);
        let err = validate(&state, &Command::roll(Seat::White, [0, 7])).unwrap_err();

        assert!(matches!(err, CommandError::InvalidDiceValue { dice: [0, 7], .. }));
    }

    #[test]
    fn test_pending_rejects_moves() {
        let state = GameState::initial(false);
        let err = validate(&state, &Command::move_checker(Seat::White, 0, 3)).unwrap_err();

        assert!(matches!(err, CommandError::StatusViolation { status: Status::Pending, .. }));
    }

    #[test]
    fn test_roll_twice_rejected() {
        let state = crate::events::fold(
            &GameState::initial(false),
            &Event::Rolled { seat: Seat::White, dice: [3, 1] },
        );
        let err = validate(&state, &Command::roll(Seat::White, [2, 2])).unwrap_err();

        assert!(matches!(err, CommandError::StatusViolation { status: Status::Started, .. }));
    }

    #[test]
    fn test_move_resolves_target_and_capture() {
        let mut state = crate::events::fold(
            &GameState::initial(false),
            &Event::Rolled { seat: Seat::White, dice: [3, 1] },
        );
        state.points[5][Seat::Black] = 4;
        state.points[3][Seat::Black] = 1;

        let event = validate(&state, &Command::move_checker(Seat::White, 0, 3)).unwrap();
        assert_eq!(
            event,
            Event::Moved { seat: Seat::White, from: 0, to: 3, die: 3, capture: true }
        );
    }

    #[test]
    fn test_bear_off_becomes_moved_off_board() {
        let mut state = GameState::empty(false);
        state.points[22][Seat::White] = 1;
        state.off[Seat::White] = 14;
        state.points[0][Seat::Black] = 15;
        let state = crate::events::fold(&state, &Event::Rolled { seat: Seat::White, dice: [2, 5] });

        let event = validate(&state, &Command::bear_off(Seat::White, 22, 2)).unwrap();
        assert_eq!(
            event,
            Event::Moved { seat: Seat::White, from: 22, to: 24, die: 2, capture: false }
        );
    }

    #[test]
    fn test_propose_double_disabled() {
        let state = GameState::initial(false);
        let err = validate(&state, &Command::propose_double(Seat::White)).unwrap_err();

        assert!(matches!(
            err,
            CommandError::CubeViolation { reason: CubeViolationReason::Disabled, .. }
        ));
    }

    #[test]
    fn test_propose_double_not_holder() {
        let mut state = GameState::initial(true);
        state.cube = Some(Cube::Owned(Seat::Black));
        let err = validate(&state, &Command::propose_double(Seat::White)).unwrap_err();

        assert!(matches!(
            err,
            CommandError::CubeViolation { reason: CubeViolationReason::NotCubeHolder, .. }
        ));
    }

    #[test]
    fn test_wrong_seat_responds_to_double() {
        let state = crate::events::fold(
            &GameState::initial(true),
            &Event::DoubleProposed { seat: Seat::White },
        );
        let err = validate(&state, &Command::accept(Seat::White)).unwrap_err();

        assert!(matches!(
            err,
            CommandError::StatusViolation { status: Status::DoubleProposed, .. }
        ));
        assert!(validate(&state, &Command::accept(Seat::Black)).is_ok());
    }

    #[test]
    fn test_accept_without_proposal_rejected() {
        let state = GameState::initial(true);
        let err = validate(&state, &Command::accept(Seat::Black)).unwrap_err();

        assert!(matches!(err, CommandError::StatusViolation { .. }));
    }
}
