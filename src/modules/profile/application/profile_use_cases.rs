use std::sync::Arc;

use crate::profile::application::ports::incoming::use_cases::{
    DashboardSessionUseCase, ListProfilesUseCase, SaveProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub save: Arc<dyn SaveProfileUseCase + Send + Sync>,
    pub list: Arc<dyn ListProfilesUseCase + Send + Sync>,
    pub session: Arc<dyn DashboardSessionUseCase + Send + Sync>,
}
