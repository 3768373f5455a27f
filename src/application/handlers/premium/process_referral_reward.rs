//! ProcessReferralRewardHandler - grants referrer rewards on captured
//! referred purchases.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{Money, PurchaseId, Timestamp, UserId};
use crate::domain::premium::{PremiumError, PremiumEvent, ReferralReward};
use crate::ports::{EventPublisher, ReferralProgramStore, ReferralRewardStore};

/// Command to grant a reward for a captured referred purchase.
#[derive(Debug, Clone)]
pub struct ProcessReferralRewardCommand {
    pub purchase_id: PurchaseId,
    pub referrer_id: UserId,
    pub referee_id: UserId,
    /// Final amount of the captured purchase; percentage rewards are
    /// computed against it.
    pub purchase_amount: Money,
}

/// Outcome of reward processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessReferralRewardResult {
    /// A reward row was created, awaiting settlement.
    Granted { reward: ReferralReward },
    /// No program was active at confirmation time; nothing was created.
    ///
    /// Eligibility is evaluated at the moment of the triggering event;
    /// rewards are never granted retroactively when a program is later
    /// reactivated.
    NoActiveProgram,
}

/// Handler for referral reward creation.
pub struct ProcessReferralRewardHandler {
    programs: Arc<dyn ReferralProgramStore>,
    rewards: Arc<dyn ReferralRewardStore>,
    events: Arc<dyn EventPublisher>,
}

impl ProcessReferralRewardHandler {
    pub fn new(
        programs: Arc<dyn ReferralProgramStore>,
        rewards: Arc<dyn ReferralRewardStore>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            programs,
            rewards,
            events,
        }
    }

    pub async fn handle(
        &self,
        cmd: ProcessReferralRewardCommand,
    ) -> Result<ProcessReferralRewardResult, PremiumError> {
        let now = Timestamp::now();

        let program = match self
            .programs
            .active_at(now)
            .await
            .map_err(|e| PremiumError::infrastructure(e.to_string()))?
        {
            Some(program) => program,
            None => return Ok(ProcessReferralRewardResult::NoActiveProgram),
        };

        let reward = ReferralReward::grant(
            cmd.referrer_id,
            cmd.referee_id,
            cmd.purchase_id,
            program.referrer_reward,
            cmd.purchase_amount,
        );

        self.rewards
            .save(&reward)
            .await
            .map_err(|e| PremiumError::infrastructure(e.to_string()))?;

        info!(
            reward_id = %reward.id,
            referrer = %reward.referrer_id,
            amount = %reward.amount,
            "referral reward granted"
        );

        self.events
            .publish(PremiumEvent::ReferralRewardGranted {
                reward_id: reward.id,
                referrer_id: reward.referrer_id.clone(),
                referee_id: reward.referee_id.clone(),
                purchase_id: reward.purchase_id,
                amount: reward.amount,
                occurred_at: now,
            })
            .await
            .map_err(|e| PremiumError::infrastructure(e.to_string()))?;

        Ok(ProcessReferralRewardResult::Granted { reward })
    }
}
