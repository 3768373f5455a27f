//! Academic profile provider port.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::premium::AcademicProfile;
use async_trait::async_trait;

/// Read-only access to a user's current academic profile.
///
/// Consulted once at purchase creation, where the profile is frozen onto
/// the purchase. Access checks never read the live profile.
#[async_trait]
pub trait AcademicProfileProvider: Send + Sync {
    /// The user's profile, or `None` if they have not filled one in.
    async fn fetch(&self, user_id: &UserId) -> Result<Option<AcademicProfile>, DomainError>;
}
