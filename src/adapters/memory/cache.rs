//! Recording cache invalidator.
//!
//! Tests assert against the recorded invalidations; the production
//! adapter forwards the same tags to the platform cache.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{CacheInvalidator, CacheTag};

/// [`CacheInvalidator`] that records every invalidated key.
#[derive(Default)]
pub struct RecordingCacheInvalidator {
    invalidated: RwLock<Vec<String>>,
}

impl RecordingCacheInvalidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys invalidated so far, in call order.
    pub async fn invalidated_keys(&self) -> Vec<String> {
        self.invalidated.read().await.clone()
    }
}

#[async_trait]
impl CacheInvalidator for RecordingCacheInvalidator {
    async fn invalidate(&self, user_id: &UserId, tags: &[CacheTag]) -> Result<(), DomainError> {
        let mut invalidated = self.invalidated.write().await;
        for tag in tags {
            invalidated.push(tag.key_for(user_id));
        }
        Ok(())
    }
}
