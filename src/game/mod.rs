//! The event-sourced game aggregate.

mod aggregate;

pub use aggregate::Game;
