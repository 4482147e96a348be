//! Actions the crew can attempt.

use crate::core::Action;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Intended transition of the heist. Carries no payload.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum HeistAction {
    PositionActor,
    DisableSecurity,
    CutPower,
    TriggerBreach,
    DistractGuard,
    SwapAsset,
    Reset,
}

impl HeistAction {
    /// Every action, in declaration order.
    pub const ALL: [HeistAction; 7] = [
        Self::PositionActor,
        Self::DisableSecurity,
        Self::CutPower,
        Self::TriggerBreach,
        Self::DistractGuard,
        Self::SwapAsset,
        Self::Reset,
    ];

    /// The success sequence from the initial snapshot to `Complete`.
    pub const CANONICAL: [HeistAction; 6] = [
        Self::PositionActor,
        Self::DisableSecurity,
        Self::CutPower,
        Self::TriggerBreach,
        Self::DistractGuard,
        Self::SwapAsset,
    ];
}

impl Action for HeistAction {
    fn name(&self) -> &str {
        match self {
            Self::PositionActor => "PositionActor",
            Self::DisableSecurity => "DisableSecurity",
            Self::CutPower => "CutPower",
            Self::TriggerBreach => "TriggerBreach",
            Self::DistractGuard => "DistractGuard",
            Self::SwapAsset => "SwapAsset",
            Self::Reset => "Reset",
        }
    }
}

impl fmt::Display for HeistAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
