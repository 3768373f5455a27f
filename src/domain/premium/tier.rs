//! Premium tier definitions.
//!
//! Represents the entitlement tier levels available on ScholarPass.

use serde::{Deserialize, Serialize};

/// Premium entitlement tier.
///
/// Tiers are strictly ordered: each higher tier grants a superset of the
/// access granted by the tiers below it. The ordering drives both upgrade
/// eligibility and content access checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PremiumTier {
    /// Entry tier - monthly access to notes for the user's own course.
    Silver,

    /// Mid tier - adds quizzes and flashcards, quarterly duration.
    Gold,

    /// Top tier - full content library for a year.
    Platinum,
}

impl PremiumTier {
    /// Returns the numeric rank of this tier for ordinal comparison.
    ///
    /// Higher rank = more access. A user's tier satisfies a content
    /// requirement when `user.rank() >= required.rank()`.
    pub fn rank(&self) -> u8 {
        match self {
            PremiumTier::Silver => 1,
            PremiumTier::Gold => 2,
            PremiumTier::Platinum => 3,
        }
    }

    /// Returns true if this tier satisfies a requirement for `required`.
    pub fn satisfies(&self, required: PremiumTier) -> bool {
        self.rank() >= required.rank()
    }

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            PremiumTier::Silver => "Silver",
            PremiumTier::Gold => "Gold",
            PremiumTier::Platinum => "Platinum",
        }
    }

    /// All tiers in ascending rank order.
    pub fn all() -> [PremiumTier; 3] {
        [PremiumTier::Silver, PremiumTier::Gold, PremiumTier::Platinum]
    }
}

impl std::fmt::Display for PremiumTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
