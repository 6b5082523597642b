//! Financial-health tiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of five ordered financial-health tiers
///
/// Serialized as its integer label (0-4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Tier {
    Critical = 0,
    NeedsImprovement = 1,
    Moderate = 2,
    Good = 3,
    Excellent = 4,
}

impl Tier {
    /// All tiers from worst to best
    pub const ALL: [Tier; 5] = [
        Self::Critical,
        Self::NeedsImprovement,
        Self::Moderate,
        Self::Good,
        Self::Excellent,
    ];

    /// Integer label used by the classifier
    pub const fn label(&self) -> u8 {
        *self as u8
    }

    /// Tier for an integer label
    pub fn from_label(label: u8) -> Option<Self> {
        Self::ALL.get(usize::from(label)).copied()
    }

    /// Human-readable profile name
    pub const fn profile_name(&self) -> &'static str {
        match self {
            Self::Critical => "Critical - Immediate Action Required",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Moderate => "Moderate Budgeting",
            Self::Good => "Good Financial Health",
            Self::Excellent => "Excellent Budgeting",
        }
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.label()
    }
}

impl TryFrom<u8> for Tier {
    type Error = String;

    fn try_from(label: u8) -> Result<Self, Self::Error> {
        Self::from_label(label).ok_or_else(|| format!("invalid tier label: {}", label))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile_name())
    }
}
