use async_trait::async_trait;

use crate::profile::application::domain::entities::ProfileRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileStoreError {
    #[error("Profile store unavailable: {0}")]
    Unavailable(String),
}

/// Append-only, ordered log of saved profiles.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Adds `record` after every record appended so far.
    async fn append(&self, record: ProfileRecord) -> Result<(), ProfileStoreError>;

    /// Snapshot of all records in insertion order.
    async fn list_all(&self) -> Result<Vec<ProfileRecord>, ProfileStoreError>;
}
