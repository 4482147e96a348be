//! Closed domains of the heist snapshot.

crate::field_enum! {
    /// Physical access gate.
    pub enum Vault {
        Locked,
        Unlocked,
    }
}

crate::field_enum! {
    /// Surveillance gate.
    pub enum Security {
        Active,
        Disabled,
    }
}

crate::field_enum! {
    /// Who holds the tracked asset.
    pub enum BriefcaseHolder {
        HolderA,
        HolderB,
    }
}

crate::field_enum! {
    /// Location of the lead actor.
    pub enum Position {
        Start,
        Staging,
        Target,
    }
}

crate::field_enum! {
    /// Power-grid mode.
    pub enum Power {
        Normal,
        Backup,
    }
}

crate::field_enum! {
    /// Attention of the guarded party.
    pub enum Distraction {
        Alert,
        Distracted,
    }
}

crate::field_enum! {
    /// Progress marker, derived from the other fields.
    pub enum Stage {
        Preparation,
        Positioning,
        Infiltration,
        VaultAccess,
        Extraction,
        Complete,
    }
}

impl Stage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }
}
