//! Core workflow vocabulary.
//!
//! This module contains the pure functional core of the engine:
//! - Snapshots and action tags via the `State` and `Action` traits
//! - Guard predicates built from named `Condition`s
//! - The `Workflow` trait tying guards and effects together
//! - An immutable journal of submitted actions
//!
//! Nothing in this module performs I/O or reads the clock, except that
//! journal records carry a timestamp supplied by the caller.

mod action;
mod guard;
mod journal;
mod state;
mod workflow;

pub use action::Action;
pub use guard::{Condition, Guard};
pub use journal::{ActionLog, ActionRecord, Outcome};
pub use state::State;
pub use workflow::Workflow;
