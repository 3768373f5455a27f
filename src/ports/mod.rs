//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the premium engine and the outside world. Adapters implement these
//! ports.
//!
//! ## Record store ports
//!
//! - `PurchaseRepository` - purchase rows, unique order id, CAS updates
//! - `CouponStore` - coupon lookup and atomic usage accounting
//! - `ReferralDirectory` / `ReferralProgramStore` / `ReferralRewardStore`
//! - `EntitlementStore` - cached user entitlement (single writer)
//!
//! ## Collaborator ports
//!
//! - `AcademicProfileProvider` - live profile, read once at purchase time
//! - `PaymentGateway` - order creation (signature checks live upstream)
//! - `CacheInvalidator` - tag-based per-user cache invalidation
//! - `EventPublisher` - domain event delivery

mod cache_invalidator;
mod coupon_store;
mod entitlement_store;
mod event_publisher;
mod payment_gateway;
mod profile_provider;
mod purchase_repository;
mod referral_store;

pub use cache_invalidator::{CacheInvalidator, CacheTag};
pub use coupon_store::CouponStore;
pub use entitlement_store::EntitlementStore;
pub use event_publisher::EventPublisher;
pub use payment_gateway::{GatewayOrder, PaymentGateway};
pub use profile_provider::AcademicProfileProvider;
pub use purchase_repository::{CasOutcome, PurchaseRepository, SaveResult};
pub use referral_store::{ReferralDirectory, ReferralProgramStore, ReferralRewardStore};
