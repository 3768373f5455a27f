//! Tier catalog - pricing and feature configuration per tier.
//!
//! The only place tier economics are defined. Every other component reads
//! prices and durations from here rather than duplicating numbers.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;

use super::PremiumTier;

/// Currency for all catalog prices.
///
/// Closed variant so a new currency is a compile-time-checked change at
/// every consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Static configuration for one premium tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierConfig {
    /// The tier this configuration describes.
    pub tier: PremiumTier,
    /// Full price for one period.
    pub price: Money,
    /// Entitlement duration in days.
    pub duration_days: u32,
    /// Marketing title.
    pub title: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Feature list in display order.
    pub features: &'static [&'static str],
}

impl TierConfig {
    /// Get the configuration for a specific tier.
    ///
    /// # Tier Economics
    ///
    /// | Tier | Price | Duration |
    /// |------|-------|----------|
    /// | Silver | 99.00 | 30 days |
    /// | Gold | 249.00 | 90 days |
    /// | Platinum | 499.00 | 365 days |
    pub fn for_tier(tier: PremiumTier) -> Self {
        match tier {
            PremiumTier::Silver => Self {
                tier,
                price: Money::from_major(99),
                duration_days: 30,
                title: "Silver",
                description: "Notes for your course, one month at a time",
                features: &["Course notes", "Previous year papers"],
            },
            PremiumTier::Gold => Self {
                tier,
                price: Money::from_major(249),
                duration_days: 90,
                title: "Gold",
                description: "Everything in Silver plus quizzes and flashcards",
                features: &[
                    "Course notes",
                    "Previous year papers",
                    "Quizzes",
                    "Flashcards",
                ],
            },
            PremiumTier::Platinum => Self {
                tier,
                price: Money::from_major(499),
                duration_days: 365,
                title: "Platinum",
                description: "Full library access for a whole year",
                features: &[
                    "Course notes",
                    "Previous year papers",
                    "Quizzes",
                    "Flashcards",
                    "Full library across courses",
                    "Early access to new content",
                ],
            },
        }
    }

    /// All tier configurations in display (ascending rank) order.
    pub fn all() -> Vec<TierConfig> {
        PremiumTier::all().into_iter().map(Self::for_tier).collect()
    }

    /// Tiers a user on `current` may upgrade to: strictly higher rank only.
    ///
    /// Same-tier and downgrade "upgrades" are never offered.
    pub fn upgrade_options(current: PremiumTier) -> Vec<TierConfig> {
        PremiumTier::all()
            .into_iter()
            .filter(|t| t.rank() > current.rank())
            .map(Self::for_tier)
            .collect()
    }
}
