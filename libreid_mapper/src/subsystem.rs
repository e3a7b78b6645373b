use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use super::constants::*;
use super::error::SubsystemError;

/// The detector subsystems which share the canonical digi id scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subsystem {
    Mdc,
    Tof,
    Emc,
    Muc,
    Cgem,
}

impl Subsystem {
    pub const ALL: [Subsystem; 5] = [
        Subsystem::Mdc,
        Subsystem::Tof,
        Subsystem::Emc,
        Subsystem::Muc,
        Subsystem::Cgem,
    ];

    /// The tag byte stored in bits 24-31 of every digi id of this subsystem
    pub const fn tag(&self) -> u8 {
        match self {
            Self::Mdc => DIGI_MDC_FLAG,
            Self::Tof => DIGI_TOF_FLAG,
            Self::Emc => DIGI_EMC_FLAG,
            Self::Muc => DIGI_MUC_FLAG,
            Self::Cgem => DIGI_CGEM_FLAG,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.tag() == tag)
    }

    /// Number of hardware addresses the readout electronics can produce.
    ///
    /// CGEM has no hardware layout, so there is nothing to translate.
    pub const fn address_space(&self) -> Option<usize> {
        match self {
            Self::Mdc => Some(MDC_ADDRESS_SPACE),
            Self::Tof => Some(TOF_ADDRESS_SPACE),
            Self::Emc => Some(EMC_ADDRESS_SPACE),
            Self::Muc => Some(MUC_ADDRESS_SPACE),
            Self::Cgem => None,
        }
    }

    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Mdc => "mdc",
            Self::Tof => "tof",
            Self::Emc => "emc",
            Self::Muc => "muc",
            Self::Cgem => "cgem",
        }
    }
}

impl Display for Subsystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword().to_uppercase())
    }
}

impl FromStr for Subsystem {
    type Err = SubsystemError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|sub| sub.keyword() == lowered)
            .ok_or(SubsystemError::InvalidKeyword(s.to_string()))
    }
}
