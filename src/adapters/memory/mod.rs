//! In-memory adapters.
//!
//! Reference implementations of every port, used by the integration
//! tests and local development. Each mirrors the concurrency guarantees
//! its production counterpart gets from the backing store (unique
//! constraints, conditional updates, atomic counters).

mod cache;
mod coupon_store;
mod entitlement_store;
mod events;
mod gateway;
mod profile_provider;
mod purchase_store;
mod referral;

pub use cache::RecordingCacheInvalidator;
pub use coupon_store::InMemoryCouponStore;
pub use entitlement_store::InMemoryEntitlementStore;
pub use events::InMemoryEventPublisher;
pub use gateway::FakePaymentGateway;
pub use profile_provider::InMemoryProfileProvider;
pub use purchase_store::InMemoryPurchaseStore;
pub use referral::{
    InMemoryReferralDirectory, InMemoryReferralProgramStore, InMemoryReferralRewardStore,
};
