//! The game aggregate: seats, configuration, event log and current state.
//!
//! `Game` is immutable. `execute` is the only way to extend the log: it
//! validates a command against the current state and, on success, returns
//! a new `Game` with exactly one event appended and that event folded
//! into the state. The input is never modified.
//!
//! ## Invariant
//!
//! `game.state() == replay(game.base(), game.events())` for every `Game`.
//!
//! ## Concurrency
//!
//! Validation and folding must observe the same snapshot. Hosts sharing a
//! game between threads must serialize `execute` calls per game, or swap
//! the result in with a compare-and-swap against the snapshot they read.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Action, Command, GameConfig, GameState, Seat, SeatMap, Status};
use crate::events::{fold, replay, Event};
use crate::rules::{generate_moves, is_terminal, validate, CommandError, GameResult, MoveFilter};

/// An event-sourced game of backgammon.
///
/// ## Example
///
/// ```
/// use rust_backgammon::core::{Command, GameConfig, Seat, SeatMap};
/// use rust_backgammon::game::Game;
///
/// let game = Game::new(SeatMap::new("alice".to_string(), "bob".to_string()), GameConfig::new());
/// let game = game.execute(&Command::roll(Seat::White, [6, 5])).unwrap();
/// let game = game.execute(&Command::move_checker(Seat::White, 0, 6)).unwrap();
///
/// assert_eq!(game.events().len(), 2);
/// assert_eq!(game.state().dice.as_slice(), &[5]);
/// ```
///
/// Serializes as seats, config, base and log. The current state is never
/// read back from the wire; deserializing replays the log over the base.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GameRecord", into = "GameRecord")]
pub struct Game {
    seats: SeatMap<String>,
    config: GameConfig,
    /// State the event log is folded over.
    base: GameState,
    events: Vector<Event>,
    state: GameState,
}

/// Persisted form of a `Game`.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct GameRecord {
    seats: SeatMap<String>,
    config: GameConfig,
    base: GameState,
    events: Vector<Event>,
}

impl From<GameRecord> for Game {
    fn from(record: GameRecord) -> Self {
        let state = replay(&record.base, &record.events);
        Self {
            seats: record.seats,
            config: record.config,
            base: record.base,
            events: record.events,
            state,
        }
    }
}

impl From<Game> for GameRecord {
    fn from(game: Game) -> Self {
        Self {
            seats: game.seats,
            config: game.config,
            base: game.base,
            events: game.events,
        }
    }
}

impl Game {
    /// Start a new game from the standard opening position.
    #[must_use]
    pub fn new(seats: SeatMap<String>, config: GameConfig) -> Self {
        let base = config.initial_state();
        Self::with_state(seats, config, base)
    }

    /// Start a game from an arbitrary position.
    #[must_use]
    pub fn with_state(seats: SeatMap<String>, config: GameConfig, state: GameState) -> Self {
        Self {
            seats,
            config,
            base: state.clone(),
            events: Vector::new(),
            state,
        }
    }

    /// Rebuild a game by replaying a recorded event log.
    #[must_use]
    pub fn from_events(
        seats: SeatMap<String>,
        config: GameConfig,
        events: impl IntoIterator<Item = Event>,
    ) -> Self {
        let base = config.initial_state();
        GameRecord {
            seats,
            config,
            base,
            events: events.into_iter().collect(),
        }
        .into()
    }

    /// Validate and apply a command.
    ///
    /// On success, returns the game with one more event. On failure,
    /// returns the rejection; `self` is untouched either way.
    pub fn execute(&self, command: &Command) -> Result<Game, CommandError> {
        match validate(&self.state, command) {
            Ok(event) => {
                tracing::debug!(
                    seat = %command.seat,
                    command = %command,
                    event = %event,
                    "command accepted"
                );
                Ok(self.append(event))
            }
            Err(err) => {
                tracing::debug!(
                    seat = %command.seat,
                    status = %self.state.status,
                    error = %err,
                    "command rejected"
                );
                Err(err)
            }
        }
    }

    fn append(&self, event: Event) -> Game {
        let mut next = self.clone();
        next.state = fold(&self.state, &event);
        next.events.push_back(event);
        next
    }

    /// Legal actions in the current state.
    #[must_use]
    pub fn moves(&self, filter: &MoveFilter) -> Vec<Action> {
        generate_moves(&self.state, filter)
    }

    /// Recompute the current state from the base and the event log.
    #[must_use]
    pub fn replay(&self) -> GameState {
        replay(&self.base, &self.events)
    }

    /// Fold the log into a new base and drop it.
    ///
    /// The current state is unchanged; only history is discarded.
    #[must_use]
    pub fn compact(&self) -> Game {
        Self::with_state(self.seats.clone(), self.config.clone(), self.state.clone())
    }

    /// Seat occupants.
    #[must_use]
    pub fn seats(&self) -> &SeatMap<String> {
        &self.seats
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// State the event log starts from.
    #[must_use]
    pub fn base(&self) -> &GameState {
        &self.base
    }

    /// Accepted events, oldest first.
    #[must_use]
    pub fn events(&self) -> &Vector<Event> {
        &self.events
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.state.status
    }

    /// Seat that is to act.
    #[must_use]
    pub fn up(&self) -> Seat {
        self.state.up
    }

    /// Winner and final stakes, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        is_terminal(&self.state)
    }
}
