//! Premium domain events.
//!
//! Emitted by the purchase lifecycle for audit logging and downstream
//! integration (notifications, analytics). Serialized as tagged JSON.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, OrderId, PurchaseId, RewardId, Timestamp, UserId};

use super::PremiumTier;

/// Events emitted by the premium purchase lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PremiumEvent {
    /// A pending purchase was recorded against a gateway order.
    PurchaseCreated {
        purchase_id: PurchaseId,
        user_id: UserId,
        order_id: OrderId,
        tier: PremiumTier,
        final_amount: Money,
        occurred_at: Timestamp,
    },

    /// A payment was captured and the entitlement activated.
    PaymentCaptured {
        purchase_id: PurchaseId,
        user_id: UserId,
        order_id: OrderId,
        tier: PremiumTier,
        expiry_date: Timestamp,
        occurred_at: Timestamp,
    },

    /// A payment reached a non-captured terminal status.
    PaymentFailed {
        purchase_id: PurchaseId,
        user_id: UserId,
        order_id: OrderId,
        reason: Option<String>,
        occurred_at: Timestamp,
    },

    /// A referral reward was granted to a referrer.
    ReferralRewardGranted {
        reward_id: RewardId,
        referrer_id: UserId,
        referee_id: UserId,
        purchase_id: PurchaseId,
        amount: Money,
        occurred_at: Timestamp,
    },
}

impl PremiumEvent {
    /// Stable event-type name for routing and audit logs.
    pub fn event_type(&self) -> &'static str {
        match self {
            PremiumEvent::PurchaseCreated { .. } => "premium.purchase_created.v1",
            PremiumEvent::PaymentCaptured { .. } => "premium.payment_captured.v1",
            PremiumEvent::PaymentFailed { .. } => "premium.payment_failed.v1",
            PremiumEvent::ReferralRewardGranted { .. } => "premium.referral_reward_granted.v1",
        }
    }
}
