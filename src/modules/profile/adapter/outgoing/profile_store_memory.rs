use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::profile::application::{
    domain::entities::ProfileRecord,
    ports::outgoing::{ProfileStore, ProfileStoreError},
};

/// Process-lifetime profile log. Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    records: Arc<RwLock<Vec<ProfileRecord>>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn append(&self, record: ProfileRecord) -> Result<(), ProfileStoreError> {
        let mut records = self.records.write().await;
        records.push(record);
        debug!(total = records.len(), "Profile appended");
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ProfileRecord>, ProfileStoreError> {
        Ok(self.records.read().await.clone())
    }
}
