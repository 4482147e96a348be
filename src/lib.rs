//! Heist Coordinator: a pure guarded finite-state workflow engine.
//!
//! Independent field setters can drive a composite state into combinations
//! that violate real-world causality. This crate collapses all fields into
//! one immutable snapshot and gates every change through a single pure
//! function, [`engine::apply`], which checks the action's preconditions and
//! either applies the whole effect or rejects the action with the snapshot
//! untouched.
//!
//! # Core Concepts
//!
//! - **Snapshot**: one immutable composite value via the `State` trait
//! - **Guards**: ordered, named preconditions per action
//! - **Workflow**: the guard and effect table for a closed action enum
//! - **Coordinator**: the imperative shell owning the single live snapshot
//!
//! # Example
//!
//! ```rust
//! use heist_coordinator::heist::{self, HeistAction, Stage};
//!
//! let mut coordinator = heist::coordinator();
//!
//! let result = coordinator.submit(HeistAction::CutPower);
//! assert!(!result.is_accepted());
//! assert_eq!(
//!     result.rejection().map(|r| r.to_string()),
//!     Some("CutPower rejected: security must be Disabled".to_string())
//! );
//!
//! for action in HeistAction::CANONICAL {
//!     assert!(coordinator.submit(action).is_accepted());
//! }
//! assert_eq!(coordinator.current_state().stage(), Stage::Complete);
//! assert_eq!(coordinator.log().rejected_count(), 1);
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod heist;

// Re-export commonly used types
pub use builder::{BuildError, CoordinatorBuilder, CoordinatorConfig};
pub use crate::core::{Action, Condition, Guard, State, Workflow};
pub use engine::{apply, Coordinator, Rejection, SharedCoordinator, TransitionResult};
