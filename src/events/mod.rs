//! Event sourcing: the event record and the reducer that folds it.
//!
//! State is never edited directly. Every accepted command becomes one
//! `Event`, and the current state is always `replay(initial, events)`.

pub mod event;
pub mod fold;

pub use event::Event;
pub use fold::{fold, replay};
