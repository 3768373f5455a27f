//! QuoteUpgradeHandler - Query handler for mid-cycle tier upgrades.

use std::sync::Arc;

use crate::domain::foundation::{Money, Timestamp, UserId};
use crate::domain::premium::{
    upgrade_price, Currency, PremiumError, PremiumTier, TierConfig,
};
use crate::ports::EntitlementStore;

/// Query to price an upgrade from the user's current tier to `target`.
#[derive(Debug, Clone)]
pub struct QuoteUpgradeQuery {
    pub user_id: UserId,
    pub target: PremiumTier,
}

/// A priced upgrade offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeQuote {
    pub current: PremiumTier,
    pub target: PremiumTier,
    /// Unused days on the current tier, credited at its daily rate.
    pub days_remaining: u32,
    pub amount: Money,
    pub currency: Currency,
}

/// Handler for upgrade quotes and upgrade option listings.
///
/// Upgrade eligibility is strictly ordinal: only tiers above the user's
/// current tier are offered, never the same tier or a downgrade.
pub struct QuoteUpgradeHandler {
    entitlements: Arc<dyn EntitlementStore>,
}

impl QuoteUpgradeHandler {
    pub fn new(entitlements: Arc<dyn EntitlementStore>) -> Self {
        Self { entitlements }
    }

    pub async fn handle(&self, query: QuoteUpgradeQuery) -> Result<UpgradeQuote, PremiumError> {
        let now = Timestamp::now();
        let entitlement = self
            .entitlements
            .get(&query.user_id)
            .await
            .map_err(|e| PremiumError::infrastructure(e.to_string()))?;

        if !entitlement.is_active_at(now) {
            return Err(PremiumError::invalid_state("inactive", "upgrade"));
        }
        // is_active_at guarantees the tier is present.
        let current = entitlement
            .tier
            .ok_or_else(|| PremiumError::invalid_state("inactive", "upgrade"))?;

        if query.target.rank() <= current.rank() {
            return Err(PremiumError::invalid_upgrade(
                current.display_name(),
                query.target.display_name(),
            ));
        }

        let days_remaining = entitlement.days_remaining(now);
        let amount = upgrade_price(
            &TierConfig::for_tier(current),
            &TierConfig::for_tier(query.target),
            days_remaining,
        );

        Ok(UpgradeQuote {
            current,
            target: query.target,
            days_remaining,
            amount,
            currency: Currency::Inr,
        })
    }

    /// Tiers the user may upgrade to right now. Empty when the user has
    /// no active entitlement or is already on the top tier.
    pub async fn options(&self, user_id: &UserId) -> Result<Vec<TierConfig>, PremiumError> {
        let now = Timestamp::now();
        let entitlement = self
            .entitlements
            .get(user_id)
            .await
            .map_err(|e| PremiumError::infrastructure(e.to_string()))?;

        match entitlement.tier {
            Some(current) if entitlement.is_active_at(now) => {
                Ok(TierConfig::upgrade_options(current))
            }
            _ => Ok(vec![]),
        }
    }
}
