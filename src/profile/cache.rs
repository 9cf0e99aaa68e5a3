//! Process-wide profile cache keyed by school id.
//!
//! Entries never expire; they are replaced by a later fetch or removed
//! explicitly. Unbounded unless a capacity is configured, in which case
//! moka evicts the least valuable entries past it. Concurrent loads of one
//! school may both insert, the last insert wins.

use std::sync::Arc;

use moka::future::Cache;

use crate::profile::Profile;

#[derive(Clone)]
pub struct ProfileCache {
    inner: Cache<String, Arc<Profile>>,
}

impl ProfileCache {
    pub fn new(max_capacity: Option<u64>) -> Self {
        let builder = Cache::builder();
        let inner = match max_capacity {
            Some(capacity) => builder.max_capacity(capacity).build(),
            None => builder.build(),
        };
        Self { inner }
    }

    pub async fn get(&self, school_id: &str) -> Option<Arc<Profile>> {
        self.inner.get(school_id).await
    }

    pub async fn insert(&self, school_id: &str, profile: Arc<Profile>) {
        self.inner.insert(school_id.to_string(), profile).await;
    }

    /// Drop one school's entry; returns whether one was cached.
    pub async fn clear(&self, school_id: &str) -> bool {
        self.inner.remove(school_id).await.is_some()
    }
}
