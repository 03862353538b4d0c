use async_trait::async_trait;
use tracing::info;

use crate::profile::application::{
    domain::entities::ProfileRecord,
    ports::{
        incoming::use_cases::{SaveProfileCommand, SaveProfileError, SaveProfileUseCase},
        outgoing::ProfileStore,
    },
};

#[derive(Debug, Clone)]
pub struct SaveProfileService<S>
where
    S: ProfileStore + Send + Sync,
{
    store: S,
}

impl<S> SaveProfileService<S>
where
    S: ProfileStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> SaveProfileUseCase for SaveProfileService<S>
where
    S: ProfileStore + Send + Sync,
{
    async fn execute(&self, command: SaveProfileCommand) -> Result<ProfileRecord, SaveProfileError> {
        let record = command.into_record();

        self.store
            .append(record.clone())
            .await
            .map_err(|e| SaveProfileError::StoreFailed(e.to_string()))?;

        info!(
            name = %record.name,
            skills = record.skills.len(),
            certificate = %record.certificate_name,
            "Profile saved"
        );

        Ok(record)
    }
}
