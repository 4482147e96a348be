//! The heist coordinator: the reference workflow.
//!
//! Seven fields, seven actions, one guard table. Each action either fully
//! applies or leaves the snapshot untouched, and the stage is recomputed
//! from the other fields after every accepted action. Together these keep
//! every reachable snapshot causally consistent; compare [`audit`], which
//! accepts far fewer combinations than the full product of field domains.
//!
//! # Example
//!
//! ```rust
//! use heist_coordinator::heist::{self, HeistAction, Stage};
//!
//! let start = heist::initial_state();
//!
//! let refused = heist::apply(start, HeistAction::DisableSecurity);
//! assert_eq!(
//!     refused.rejection_reason().map(|reason| reason.to_string()),
//!     Some("position must be Staging".to_string())
//! );
//!
//! let staged = heist::apply(start, HeistAction::PositionActor).into_state();
//! assert_eq!(staged.stage(), Stage::Positioning);
//! ```

mod action;
mod condition;
mod fields;
mod invariants;
mod state;

pub use action::HeistAction;
pub use condition::Condition;
pub use fields::{BriefcaseHolder, Distraction, Position, Power, Security, Stage, Vault};
pub use invariants::{audit, violations, InvariantViolation};
pub use state::HeistState;

use crate::core::{Guard, Workflow};
use crate::engine::{self, Coordinator, TransitionResult};

/// Result of one heist transition.
pub type HeistResult = TransitionResult<HeistState, HeistAction, Condition>;

/// The heist transition table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Heist;

impl Workflow for Heist {
    type State = HeistState;
    type Action = HeistAction;
    type Condition = Condition;

    fn initial_state(&self) -> HeistState {
        HeistState::INITIAL
    }

    fn guard(&self, action: &HeistAction) -> Guard<Condition> {
        // Everything but Reset is frozen once the heist is complete.
        let live = Guard::new(vec![Condition::InProgress]);
        match action {
            HeistAction::PositionActor => live.and(Condition::Position(Position::Start)),
            HeistAction::DisableSecurity => live.and(Condition::Position(Position::Staging)),
            HeistAction::CutPower => live.and(Condition::Security(Security::Disabled)),
            HeistAction::TriggerBreach => live
                .and(Condition::Power(Power::Backup))
                .and(Condition::Security(Security::Disabled)),
            HeistAction::DistractGuard => live,
            HeistAction::SwapAsset => live
                .and(Condition::Vault(Vault::Unlocked))
                .and(Condition::Distraction(Distraction::Distracted)),
            HeistAction::Reset => Guard::none(),
        }
    }

    fn effect(&self, state: HeistState, action: &HeistAction) -> HeistState {
        match action {
            HeistAction::PositionActor => state.with_position(Position::Staging),
            HeistAction::DisableSecurity => state.with_security(Security::Disabled),
            HeistAction::CutPower => state.with_power(Power::Backup),
            HeistAction::TriggerBreach => state
                .with_vault(Vault::Unlocked)
                .with_position(Position::Target),
            HeistAction::DistractGuard => state.with_distraction(Distraction::Distracted),
            HeistAction::SwapAsset => state.with_briefcase_holder(BriefcaseHolder::HolderB),
            HeistAction::Reset => HeistState::INITIAL,
        }
    }

    fn settle(&self, state: HeistState) -> HeistState {
        state.settled()
    }
}

/// The snapshot before anything has happened.
pub fn initial_state() -> HeistState {
    Heist.initial_state()
}

/// Evaluate one action against one snapshot.
pub fn apply(state: HeistState, action: HeistAction) -> HeistResult {
    engine::apply(&Heist, state, &action)
}

/// A coordinator owning a fresh heist with default configuration.
pub fn coordinator() -> Coordinator<Heist> {
    Coordinator::new(Heist)
}
