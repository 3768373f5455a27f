//! Referral program and reward entities.
//!
//! A referral program defines, for a validity window, what the referrer
//! earns and what the referee saves. Rewards are created unprocessed when
//! a referred purchase is captured; crediting them to a wallet is an
//! external settlement concern.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, Percentage, PurchaseId, RewardId, Timestamp, UserId};

/// A percentage-or-fixed benefit specification.
///
/// Percentage benefits are computed against the purchase amount at the
/// moment of evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum BenefitSpec {
    Percentage { value: Percentage },
    Fixed { amount: Money },
}

impl BenefitSpec {
    /// Computes the benefit against a base amount, capped at the base.
    pub fn amount_against(&self, base: Money) -> Money {
        match self {
            BenefitSpec::Percentage { value } => base.percent_of(*value),
            BenefitSpec::Fixed { amount } => amount.min(base),
        }
    }
}

/// A referral program active for a validity window.
///
/// At most one program should be active at a given instant; lookups take
/// the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralProgram {
    /// Start of validity window.
    pub valid_from: Timestamp,
    /// End of validity window; None = open-ended.
    pub valid_until: Option<Timestamp>,
    /// What the referrer earns on a captured referred purchase.
    pub referrer_reward: BenefitSpec,
    /// What the referee saves at purchase time.
    pub referee_discount: BenefitSpec,
}

impl ReferralProgram {
    /// True while `now` is inside the validity window.
    pub fn is_active_at(&self, now: Timestamp) -> bool {
        if now.is_before(&self.valid_from) {
            return false;
        }
        match self.valid_until {
            Some(until) => !now.is_after(&until),
            None => true,
        }
    }
}

/// A pending reward owed to a referrer.
///
/// Created eagerly (unprocessed) when a referred purchase is captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralReward {
    pub id: RewardId,
    /// Who earns the reward.
    pub referrer_id: UserId,
    /// Whose purchase triggered it.
    pub referee_id: UserId,
    /// The captured purchase that triggered the reward.
    pub purchase_id: PurchaseId,
    /// Reward value, already computed against the purchase amount.
    pub amount: Money,
    /// Benefit rule the amount was computed from.
    pub spec: BenefitSpec,
    /// False until settlement credits the referrer's wallet.
    pub is_processed: bool,
    /// When the reward was created.
    pub created_at: Timestamp,
}

impl ReferralReward {
    /// Creates an unprocessed reward for a captured referred purchase.
    pub fn grant(
        referrer_id: UserId,
        referee_id: UserId,
        purchase_id: PurchaseId,
        spec: BenefitSpec,
        purchase_amount: Money,
    ) -> Self {
        Self {
            id: RewardId::new(),
            referrer_id,
            referee_id,
            purchase_id,
            amount: spec.amount_against(purchase_amount),
            spec,
            is_processed: false,
            created_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program() -> ReferralProgram {
        ReferralProgram {
            valid_from: Timestamp::now().minus_days(1),
            valid_until: Some(Timestamp::now().add_days(30)),
            referrer_reward: BenefitSpec::Fixed { amount: Money::from_major(20) },
            referee_discount: BenefitSpec::Fixed { amount: Money::from_major(5) },
        }
    }

    #[test]
    fn program_active_inside_window() {
        assert!(program().is_active_at(Timestamp::now()));
    }

    #[test]
    fn program_inactive_before_window() {
        let mut p = program();
        p.valid_from = Timestamp::now().add_days(1);
        assert!(!p.is_active_at(Timestamp::now()));
    }

    #[test]
    fn program_inactive_after_window() {
        let mut p = program();
        p.valid_until = Some(Timestamp::now().minus_days(1));
        assert!(!p.is_active_at(Timestamp::now()));
    }

    #[test]
    fn percentage_benefit_computes_share_of_base() {
        let spec = BenefitSpec::Percentage { value: Percentage::new(10) };
        assert_eq!(spec.amount_against(Money::from_major(99)).minor_units(), 990);
    }

    #[test]
    fn fixed_benefit_is_capped_at_base() {
        let spec = BenefitSpec::Fixed { amount: Money::from_major(50) };
        assert_eq!(spec.amount_against(Money::from_major(30)), Money::from_major(30));
    }

    #[test]
    fn grant_creates_unprocessed_reward() {
        let reward = ReferralReward::grant(
            UserId::new("referrer").unwrap(),
            UserId::new("referee").unwrap(),
            PurchaseId::new(),
            BenefitSpec::Fixed { amount: Money::from_major(20) },
            Money::from_major(99),
        );
        assert!(!reward.is_processed);
        assert_eq!(reward.amount, Money::from_major(20));
    }

    #[test]
    fn grant_computes_percentage_against_purchase_amount() {
        let reward = ReferralReward::grant(
            UserId::new("referrer").unwrap(),
            UserId::new("referee").unwrap(),
            PurchaseId::new(),
            BenefitSpec::Percentage { value: Percentage::new(10) },
            Money::from_major(249),
        );
        assert_eq!(reward.amount.minor_units(), 2490);
    }
}
