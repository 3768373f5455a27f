//! In-memory academic profile provider.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::premium::AcademicProfile;
use crate::ports::AcademicProfileProvider;

/// In-memory [`AcademicProfileProvider`] keyed by user.
#[derive(Default)]
pub struct InMemoryProfileProvider {
    profiles: RwLock<HashMap<String, AcademicProfile>>,
}

impl InMemoryProfileProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set(&self, user_id: &UserId, profile: AcademicProfile) {
        self.profiles
            .write()
            .await
            .insert(user_id.as_str().to_string(), profile);
    }
}

#[async_trait]
impl AcademicProfileProvider for InMemoryProfileProvider {
    async fn fetch(&self, user_id: &UserId) -> Result<Option<AcademicProfile>, DomainError> {
        Ok(self.profiles.read().await.get(user_id.as_str()).cloned())
    }
}
