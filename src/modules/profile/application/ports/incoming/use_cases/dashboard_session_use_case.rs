use async_trait::async_trait;

use crate::profile::application::{
    domain::{
        form::{FormError, FormEvent},
        session::DashboardView,
    },
    ports::incoming::use_cases::{ListProfilesError, SaveProfileCommandError, SaveProfileError},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DashboardSessionError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Command(#[from] SaveProfileCommandError),

    #[error(transparent)]
    Save(#[from] SaveProfileError),

    #[error(transparent)]
    List(#[from] ListProfilesError),
}

/// The interactive dashboard: one event in, one freshly rendered view out.
#[async_trait]
pub trait DashboardSessionUseCase: Send + Sync {
    async fn dispatch(&self, event: FormEvent) -> Result<DashboardView, DashboardSessionError>;

    async fn view(&self) -> Result<DashboardView, DashboardSessionError>;
}
