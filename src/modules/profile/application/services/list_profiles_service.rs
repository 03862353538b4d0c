use async_trait::async_trait;

use crate::profile::application::{
    domain::entities::ProfileRecord,
    ports::{
        incoming::use_cases::{ListProfilesError, ListProfilesUseCase},
        outgoing::ProfileStore,
    },
};

#[derive(Debug, Clone)]
pub struct ListProfilesService<S>
where
    S: ProfileStore + Send + Sync,
{
    store: S,
}

impl<S> ListProfilesService<S>
where
    S: ProfileStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> ListProfilesUseCase for ListProfilesService<S>
where
    S: ProfileStore + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProfileRecord>, ListProfilesError> {
        self.store
            .list_all()
            .await
            .map_err(|e| ListProfilesError::QueryFailed(e.to_string()))
    }
}
