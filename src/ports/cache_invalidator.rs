//! Cache invalidation port.
//!
//! Tag-based invalidation of per-user cached views. The engine itself is
//! cache-agnostic: it names the tags to drop and nothing more, and the
//! only call site is the capture transition of the payment confirmation
//! handler.

use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;

/// Named cache tags for per-user premium views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheTag {
    PremiumStatus,
    PurchaseHistory,
}

impl CacheTag {
    /// The cache key for this tag scoped to a user.
    pub fn key_for(&self, user_id: &UserId) -> String {
        match self {
            CacheTag::PremiumStatus => format!("user-premium-status:{}", user_id),
            CacheTag::PurchaseHistory => format!("user-purchase-history:{}", user_id),
        }
    }
}

/// Port for dropping cached views keyed by user.
#[async_trait]
pub trait CacheInvalidator: Send + Sync {
    /// Invalidate the given tags for a user.
    async fn invalidate(&self, user_id: &UserId, tags: &[CacheTag]) -> Result<(), DomainError>;
}
