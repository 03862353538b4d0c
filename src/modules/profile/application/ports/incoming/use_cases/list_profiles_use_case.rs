use async_trait::async_trait;

use crate::profile::application::domain::entities::ProfileRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListProfilesError {
    #[error("Failed to list profiles: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListProfilesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProfileRecord>, ListProfilesError>;
}
