//! Event publisher port.

use crate::domain::foundation::DomainError;
use crate::domain::premium::PremiumEvent;
use async_trait::async_trait;

/// Port for publishing premium domain events.
///
/// Implementations deliver events to the platform's bus for audit
/// logging and downstream consumers (notifications, analytics).
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: PremiumEvent) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_publisher_is_object_safe() {
        fn _accepts_dyn(_publisher: &dyn EventPublisher) {}
    }
}
