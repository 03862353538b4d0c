use async_trait::async_trait;

use crate::profile::application::{
    domain::{
        entities::ProfileRecord,
        form::FormEvent,
        session::{DashboardSession, DashboardView},
    },
    ports::incoming::use_cases::{
        DashboardSessionError, DashboardSessionUseCase, ListProfilesError, ListProfilesUseCase,
        SaveProfileCommand, SaveProfileError, SaveProfileUseCase,
    },
};

/* --------------------------------------------------
 * Save profile
 * -------------------------------------------------- */

/// Echoes the command's record back, or fails with a store error.
#[derive(Clone)]
pub struct StubSaveProfileUseCase {
    failure: Option<String>,
}

impl StubSaveProfileUseCase {
    pub fn success() -> Self {
        Self { failure: None }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            failure: Some(msg.into()),
        }
    }
}

#[async_trait]
impl SaveProfileUseCase for StubSaveProfileUseCase {
    async fn execute(&self, command: SaveProfileCommand) -> Result<ProfileRecord, SaveProfileError> {
        match &self.failure {
            Some(msg) => Err(SaveProfileError::StoreFailed(msg.clone())),
            None => Ok(command.into_record()),
        }
    }
}

/* --------------------------------------------------
 * List profiles
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubListProfilesUseCase {
    result: Result<Vec<ProfileRecord>, ListProfilesError>,
}

impl StubListProfilesUseCase {
    pub fn success(data: Vec<ProfileRecord>) -> Self {
        Self { result: Ok(data) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(ListProfilesError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl ListProfilesUseCase for StubListProfilesUseCase {
    async fn execute(&self) -> Result<Vec<ProfileRecord>, ListProfilesError> {
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Dashboard session
 * -------------------------------------------------- */

/// Renders a fixed session for every request and ignores events.
#[derive(Clone)]
pub struct StubDashboardSession {
    result: Result<DashboardSession, DashboardSessionError>,
}

impl StubDashboardSession {
    pub fn rendering(session: DashboardSession) -> Self {
        Self {
            result: Ok(session),
        }
    }

    pub fn list_failure(msg: &str) -> Self {
        Self {
            result: Err(ListProfilesError::QueryFailed(msg.into()).into()),
        }
    }

    fn render(&self) -> Result<DashboardView, DashboardSessionError> {
        self.result
            .as_ref()
            .map(|session| session.render(None, None))
            .map_err(|err| err.clone())
    }
}

#[async_trait]
impl DashboardSessionUseCase for StubDashboardSession {
    async fn dispatch(&self, _event: FormEvent) -> Result<DashboardView, DashboardSessionError> {
        self.render()
    }

    async fn view(&self) -> Result<DashboardView, DashboardSessionError> {
        self.render()
    }
}
