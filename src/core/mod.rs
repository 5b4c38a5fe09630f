//! Core types: seats, board geometry, dice, configuration, actions,
//! commands, state and the host-side dice source.
//!
//! Nothing here knows the rules of play. Legality lives in `crate::rules`
//! and state transitions in `crate::events`.

pub mod seat;
pub mod board;
pub mod dice;
pub mod config;
pub mod action;
pub mod command;
pub mod state;
pub mod rng;

pub use seat::{Seat, SeatMap};
pub use board::{Point, CHECKERS_PER_SEAT, POINT_COUNT};
pub use dice::Dice;
pub use config::GameConfig;
pub use action::{Action, ActionKind, ActionType};
pub use command::{Command, CommandKind};
pub use state::{Cube, GameState, Slot, Status, MAX_STAKES};
pub use rng::{GameRng, GameRngState};
