//! In-memory event publisher.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::premium::PremiumEvent;
use crate::ports::EventPublisher;

/// [`EventPublisher`] that buffers events in memory.
#[derive(Default)]
pub struct InMemoryEventPublisher {
    events: RwLock<Vec<PremiumEvent>>,
}

impl InMemoryEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events published so far, in publish order.
    pub async fn published(&self) -> Vec<PremiumEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(&self, event: PremiumEvent) -> Result<(), DomainError> {
        self.events.write().await.push(event);
        Ok(())
    }
}
