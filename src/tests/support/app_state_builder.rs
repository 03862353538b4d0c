use std::sync::Arc;

use actix_web::web;

use crate::profile::application::{
    domain::{policies::attachment_policy::AttachmentPolicy, session::DashboardSession},
    ports::incoming::use_cases::{
        DashboardSessionUseCase, ListProfilesUseCase, SaveProfileUseCase,
    },
    profile_use_cases::ProfileUseCases,
};
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    save: Arc<dyn SaveProfileUseCase + Send + Sync>,
    list: Arc<dyn ListProfilesUseCase + Send + Sync>,
    session: Arc<dyn DashboardSessionUseCase + Send + Sync>,
    attachment_policy: AttachmentPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            save: Arc::new(StubSaveProfileUseCase::failure("not used in this test")),
            list: Arc::new(StubListProfilesUseCase::success(vec![])),
            session: Arc::new(StubDashboardSession::rendering(DashboardSession::default())),
            attachment_policy: AttachmentPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_save_profile(
        mut self,
        uc: impl SaveProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.save = Arc::new(uc);
        self
    }

    pub fn with_list_profiles(
        mut self,
        uc: impl ListProfilesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list = Arc::new(uc);
        self
    }

    pub fn with_session(
        mut self,
        uc: impl DashboardSessionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.session = Arc::new(uc);
        self
    }

    pub fn with_attachment_policy(mut self, policy: AttachmentPolicy) -> Self {
        self.attachment_policy = policy;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            profile: ProfileUseCases {
                save: self.save,
                list: self.list,
                session: self.session,
            },
            attachment_policy: self.attachment_policy,
        })
    }
}
