//! In-memory referral adapters: directory, program store, reward store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::premium::{ReferralProgram, ReferralReward};
use crate::ports::{ReferralDirectory, ReferralProgramStore, ReferralRewardStore};

/// In-memory [`ReferralDirectory`] mapping codes to their owners.
#[derive(Default)]
pub struct InMemoryReferralDirectory {
    codes: RwLock<HashMap<String, UserId>>,
}

impl InMemoryReferralDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, code: impl Into<String>, owner: UserId) {
        self.codes.write().await.insert(code.into(), owner);
    }
}

#[async_trait]
impl ReferralDirectory for InMemoryReferralDirectory {
    async fn resolve(&self, code: &str) -> Result<Option<UserId>, DomainError> {
        Ok(self.codes.read().await.get(code).cloned())
    }
}

/// In-memory [`ReferralProgramStore`]; first window match wins.
#[derive(Default)]
pub struct InMemoryReferralProgramStore {
    programs: RwLock<Vec<ReferralProgram>>,
}

impl InMemoryReferralProgramStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, program: ReferralProgram) {
        self.programs.write().await.push(program);
    }
}

#[async_trait]
impl ReferralProgramStore for InMemoryReferralProgramStore {
    async fn active_at(&self, now: Timestamp) -> Result<Option<ReferralProgram>, DomainError> {
        Ok(self
            .programs
            .read()
            .await
            .iter()
            .find(|p| p.is_active_at(now))
            .cloned())
    }
}

/// In-memory [`ReferralRewardStore`].
#[derive(Default)]
pub struct InMemoryReferralRewardStore {
    rewards: RwLock<Vec<ReferralReward>>,
}

impl InMemoryReferralRewardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn all(&self) -> Vec<ReferralReward> {
        self.rewards.read().await.clone()
    }
}

#[async_trait]
impl ReferralRewardStore for InMemoryReferralRewardStore {
    async fn save(&self, reward: &ReferralReward) -> Result<(), DomainError> {
        self.rewards.write().await.push(reward.clone());
        Ok(())
    }
}
