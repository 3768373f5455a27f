//! User entitlement - the cached view of the latest captured purchase.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::PremiumTier;

/// A user's current premium entitlement.
///
/// This is a cache of the most recent captured purchase, written only by
/// the payment confirmation path. An entitlement whose expiry has passed
/// must be treated as expired even when the stored `is_active` flag has
/// not yet been lazily corrected.
///
/// # Invariant
///
/// `is_active == true` implies both `tier` and `expiry_date` are set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntitlement {
    pub is_active: bool,
    pub tier: Option<PremiumTier>,
    pub expiry_date: Option<Timestamp>,
}

impl UserEntitlement {
    /// An entitlement for a user who has never purchased.
    pub fn none() -> Self {
        Self {
            is_active: false,
            tier: None,
            expiry_date: None,
        }
    }

    /// An active entitlement for a captured purchase.
    pub fn active(tier: PremiumTier, expiry_date: Timestamp) -> Self {
        Self {
            is_active: true,
            tier: Some(tier),
            expiry_date: Some(expiry_date),
        }
    }

    /// Whole days until expiry, rounded up; zero when expired or absent.
    pub fn days_remaining(&self, now: Timestamp) -> u32 {
        match self.expiry_date {
            Some(expiry) => now.days_until(&expiry),
            None => 0,
        }
    }

    /// True when the entitlement grants access at `now`.
    ///
    /// Checks the expiry date, not just the stored flag, so a stale
    /// `is_active` never extends access past expiry.
    pub fn is_active_at(&self, now: Timestamp) -> bool {
        self.is_active && self.tier.is_some() && self.days_remaining(now) > 0
    }
}

impl Default for UserEntitlement {
    fn default() -> Self {
        Self::none()
    }
}
