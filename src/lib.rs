//! # rust-backgammon
//!
//! An event-sourced rules engine for backgammon.
//!
//! ## Design Principles
//!
//! 1. **Exhaustive Legality**: The move generator is the single source of
//!    truth. A command is accepted only if it is among the generated actions.
//!
//! 2. **Event Sourcing**: Accepted commands become immutable events. State
//!    is always the fold of the event log over the starting position.
//!
//! 3. **Deterministic Core**: No ambient randomness, no I/O. Dice are an
//!    input to `roll`, supplied by the caller.
//!
//! ## Data Flow
//!
//! ```text
//! Command -> validate (consults generate_moves) -> Event -> fold -> GameState
//! ```
//!
//! Rejected commands never reach the reducer.
//!
//! ## Modules
//!
//! - `core`: Seats, board geometry, dice, configuration, actions, commands,
//!   state, host-side dice source
//! - `rules`: Move generation, command validation, win detection
//! - `events`: Event record and reducer
//! - `game`: The aggregate tying log and state together

pub mod core;
pub mod rules;
pub mod events;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Seat, SeatMap, Point,
    Dice, GameConfig,
    Action, ActionKind, ActionType,
    Command, CommandKind,
    Cube, GameState, Status,
    GameRng, GameRngState,
};

pub use crate::rules::{
    generate_moves, validate, is_terminal,
    MoveFilter, CommandError, CubeViolationReason, GameResult,
};

pub use crate::events::{fold, replay, Event};

pub use crate::game::Game;
