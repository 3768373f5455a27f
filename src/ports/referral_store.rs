//! Referral ports: code resolution, program lookup, reward persistence.

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::premium::{ReferralProgram, ReferralReward};
use async_trait::async_trait;

/// Resolves referral codes to the users who own them.
#[async_trait]
pub trait ReferralDirectory: Send + Sync {
    /// Returns the referrer behind `code`, or `None` for an unknown code.
    ///
    /// Self-referral filtering is the caller's concern; the directory
    /// only answers "whose code is this".
    async fn resolve(&self, code: &str) -> Result<Option<UserId>, DomainError>;
}

/// Looks up the referral program in effect at a point in time.
#[async_trait]
pub trait ReferralProgramStore: Send + Sync {
    /// The program whose validity window contains `now`, if any.
    ///
    /// At most one program should be active at an instant; when data
    /// violates that, the first match wins.
    async fn active_at(&self, now: Timestamp) -> Result<Option<ReferralProgram>, DomainError>;
}

/// Persists referrer rewards for later settlement.
#[async_trait]
pub trait ReferralRewardStore: Send + Sync {
    /// Save a newly granted (unprocessed) reward.
    async fn save(&self, reward: &ReferralReward) -> Result<(), DomainError>;
}
