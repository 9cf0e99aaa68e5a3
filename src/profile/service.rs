//! Cached profile loading.

use std::sync::Arc;

use crate::profile::cache::ProfileCache;
use crate::profile::client::{FetchError, ProfileClient};
use crate::profile::Profile;

#[derive(Clone)]
pub struct ProfileService {
    client: ProfileClient,
    cache: ProfileCache,
}

impl ProfileService {
    pub fn new(client: ProfileClient, cache: ProfileCache) -> Self {
        Self { client, cache }
    }

    /// Cached profile, or a fresh fetch that is cached on success.
    /// Failures are not cached.
    pub async fn load(&self, school_id: &str) -> Result<Arc<Profile>, FetchError> {
        if let Some(profile) = self.cache.get(school_id).await {
            tracing::debug!("Cache hit for school {}", school_id);
            return Ok(profile);
        }

        match self.client.fetch(school_id).await {
            Ok(profile) => {
                let profile = Arc::new(profile);
                self.cache.insert(school_id, profile.clone()).await;
                tracing::info!("Loaded profile for school {}", school_id);
                Ok(profile)
            }
            Err(e) => {
                tracing::warn!("Failed to load profile for school {}: {}", school_id, e);
                Err(e)
            }
        }
    }

    pub async fn clear(&self, school_id: &str) -> bool {
        self.cache.clear(school_id).await
    }
}
