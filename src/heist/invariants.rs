//! Causal consistency of heist snapshots.
//!
//! Snapshots produced by the engine are consistent by construction. This
//! audit exists for snapshots that arrive from elsewhere, such as a
//! deserialized payload or a display model assembled field by field.

use super::fields::{BriefcaseHolder, Position, Power, Security, Stage, Vault};
use super::state::HeistState;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A field combination that violates real-world causality.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvariantViolation {
    #[error("Vault is unlocked while security is still active")]
    VaultOpenUnderSurveillance,

    #[error("Power is on backup while security is still active")]
    PowerCutUnderSurveillance,

    #[error("Security is disabled but the actor never left the start")]
    SecurityDownBeforeStaging,

    #[error("Actor is at the target but the vault is locked")]
    ActorInsideLockedVault,

    #[error("Asset was swapped but the vault is locked")]
    AssetSwappedWhileLocked,

    #[error("Stage {recorded} does not match the fields, which imply {derived}")]
    StageOutOfSync { recorded: Stage, derived: Stage },
}

type Audit = Validation<(), NonEmptyVec<InvariantViolation>>;

fn require(holds: bool, violation: InvariantViolation) -> Audit {
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

/// Check a snapshot against every causal rule, accumulating ALL violations.
pub fn audit(state: &HeistState) -> Audit {
    let surveilled = state.security() == Security::Active;
    let locked = state.vault() == Vault::Locked;

    let checks = vec![
        require(
            !(state.vault() == Vault::Unlocked && surveilled),
            InvariantViolation::VaultOpenUnderSurveillance,
        ),
        require(
            !(state.power() == Power::Backup && surveilled),
            InvariantViolation::PowerCutUnderSurveillance,
        ),
        require(
            !(state.security() == Security::Disabled && state.position() == Position::Start),
            InvariantViolation::SecurityDownBeforeStaging,
        ),
        require(
            !(state.position() == Position::Target && locked),
            InvariantViolation::ActorInsideLockedVault,
        ),
        require(
            !(state.briefcase_holder() == BriefcaseHolder::HolderB && locked),
            InvariantViolation::AssetSwappedWhileLocked,
        ),
        require(
            state.stage() == state.derived_stage(),
            InvariantViolation::StageOutOfSync {
                recorded: state.stage(),
                derived: state.derived_stage(),
            },
        ),
    ];

    Validation::all_vec(checks).map(|_| ())
}

/// Every violation of a snapshot, for rendering.
pub fn violations(state: &HeistState) -> Vec<InvariantViolation> {
    match audit(state) {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().copied().collect(),
    }
}

impl HeistState {
    /// Whether the snapshot passes the causal audit.
    pub fn is_consistent(&self) -> bool {
        audit(self).is_success()
    }
}
