//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the premium engine to external systems:
//! - `memory` - In-memory reference implementations for tests and local
//!   development

pub mod memory;

pub use memory::{
    FakePaymentGateway, InMemoryCouponStore, InMemoryEntitlementStore, InMemoryEventPublisher,
    InMemoryProfileProvider, InMemoryPurchaseStore, InMemoryReferralDirectory,
    InMemoryReferralProgramStore, InMemoryReferralRewardStore, RecordingCacheInvalidator,
};
