//! The heist snapshot.

use super::fields::{BriefcaseHolder, Distraction, Position, Power, Security, Stage, Vault};
use crate::core::State;
use serde::{Deserialize, Serialize};

/// One immutable snapshot of the whole operation.
///
/// Fields are private and have no setters. A snapshot is produced by
/// [`initial_state`](super::initial_state), by [`apply`](super::apply), or
/// by deserializing; the last one is unchecked, see
/// [`audit`](super::audit).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeistState {
    vault: Vault,
    security: Security,
    briefcase_holder: BriefcaseHolder,
    position: Position,
    power: Power,
    distraction: Distraction,
    stage: Stage,
}

impl HeistState {
    pub(crate) const INITIAL: HeistState = HeistState {
        vault: Vault::Locked,
        security: Security::Active,
        briefcase_holder: BriefcaseHolder::HolderA,
        position: Position::Start,
        power: Power::Normal,
        distraction: Distraction::Alert,
        stage: Stage::Preparation,
    };

    pub fn vault(&self) -> Vault {
        self.vault
    }

    pub fn security(&self) -> Security {
        self.security
    }

    pub fn briefcase_holder(&self) -> BriefcaseHolder {
        self.briefcase_holder
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn power(&self) -> Power {
        self.power
    }

    pub fn distraction(&self) -> Distraction {
        self.distraction
    }

    /// The stage as recorded in the snapshot.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The stage the other fields imply.
    ///
    /// Checked from the furthest milestone back, so the most advanced
    /// field that has moved wins. An open vault stays in `VaultAccess`
    /// until the swap; no action leads to `Extraction`.
    pub fn derived_stage(&self) -> Stage {
        if self.briefcase_holder == BriefcaseHolder::HolderB {
            Stage::Complete
        } else if self.power == Power::Backup || self.vault == Vault::Unlocked {
            Stage::VaultAccess
        } else if self.security == Security::Disabled {
            Stage::Infiltration
        } else if self.position != Position::Start {
            Stage::Positioning
        } else {
            Stage::Preparation
        }
    }

    pub(super) fn with_vault(self, vault: Vault) -> Self {
        Self { vault, ..self }
    }

    pub(super) fn with_security(self, security: Security) -> Self {
        Self { security, ..self }
    }

    pub(super) fn with_briefcase_holder(self, briefcase_holder: BriefcaseHolder) -> Self {
        Self {
            briefcase_holder,
            ..self
        }
    }

    pub(super) fn with_position(self, position: Position) -> Self {
        Self { position, ..self }
    }

    pub(super) fn with_power(self, power: Power) -> Self {
        Self { power, ..self }
    }

    pub(super) fn with_distraction(self, distraction: Distraction) -> Self {
        Self {
            distraction,
            ..self
        }
    }

    pub(super) fn settled(self) -> Self {
        Self {
            stage: self.derived_stage(),
            ..self
        }
    }
}

impl State for HeistState {
    fn name(&self) -> &str {
        self.stage.name()
    }

    fn is_final(&self) -> bool {
        self.stage.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_snapshot_is_preparation() {
        let state = HeistState::INITIAL;
        assert_eq!(state.stage(), Stage::Preparation);
        assert_eq!(state.derived_stage(), Stage::Preparation);
        assert_eq!(state.name(), "Preparation");
        assert!(!state.is_final());
    }

    #[test]
    fn derived_stage_follows_furthest_milestone() {
        let staged = HeistState::INITIAL.with_position(Position::Staging);
        assert_eq!(staged.derived_stage(), Stage::Positioning);

        let dark = staged.with_security(Security::Disabled);
        assert_eq!(dark.derived_stage(), Stage::Infiltration);

        let backup = dark.with_power(Power::Backup);
        assert_eq!(backup.derived_stage(), Stage::VaultAccess);

        let open = backup
            .with_vault(Vault::Unlocked)
            .with_position(Position::Target);
        assert_eq!(open.derived_stage(), Stage::VaultAccess);

        let swapped = open.with_briefcase_holder(BriefcaseHolder::HolderB);
        assert_eq!(swapped.derived_stage(), Stage::Complete);
    }

    #[test]
    fn distraction_does_not_move_stage() {
        let distracted = HeistState::INITIAL.with_distraction(Distraction::Distracted);
        assert_eq!(distracted.derived_stage(), Stage::Preparation);
    }

    #[test]
    fn settled_overwrites_recorded_stage() {
        let state = HeistState::INITIAL.with_position(Position::Staging);
        assert_eq!(state.stage(), Stage::Preparation);
        assert_eq!(state.settled().stage(), Stage::Positioning);
    }

    #[test]
    fn snapshot_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(HeistState::INITIAL).unwrap();
        assert_eq!(json["briefcaseHolder"], "HolderA");
        assert_eq!(json["stage"], "Preparation");

        let back: HeistState = serde_json::from_value(json).unwrap();
        assert_eq!(back, HeistState::INITIAL);
    }
}
