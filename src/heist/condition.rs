//! Preconditions of the heist guard table.

use super::fields::{Distraction, Position, Power, Security, Vault};
use super::state::HeistState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A requirement an action places on the snapshot.
///
/// Field requirements name the value the field must hold. `Display`
/// gives the user-facing rejection reason, e.g. "position must be Staging".
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Condition {
    /// The heist has not reached its terminal stage
    InProgress,
    Vault(Vault),
    Security(Security),
    Position(Position),
    Power(Power),
    Distraction(Distraction),
}

impl crate::core::Condition<HeistState> for Condition {
    fn holds(&self, state: &HeistState) -> bool {
        match *self {
            Self::InProgress => !state.stage().is_terminal(),
            Self::Vault(vault) => state.vault() == vault,
            Self::Security(security) => state.security() == security,
            Self::Position(position) => state.position() == position,
            Self::Power(power) => state.power() == power,
            Self::Distraction(distraction) => state.distraction() == distraction,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => f.write_str("heist is already complete"),
            Self::Vault(vault) => write!(f, "vault must be {vault}"),
            Self::Security(security) => write!(f, "security must be {security}"),
            Self::Position(position) => write!(f, "position must be {position}"),
            Self::Power(power) => write!(f, "power must be {power}"),
            Self::Distraction(distraction) => write!(f, "guard must be {distraction}"),
        }
    }
}
