//! Core state machine types.
//!
//! This module contains the pure foundation the account machine is
//! built on:
//! - Snapshot inspection via the `State` trait
//! - Guard predicates checked before a transition runs
//! - Immutable history of applied transitions
//!
//! Nothing in here performs side effects.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
