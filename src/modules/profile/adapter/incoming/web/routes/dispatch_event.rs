use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

use crate::{
    profile::application::{
        domain::form::{FormError, FormEvent},
        ports::incoming::use_cases::{
            DashboardSessionError, ListProfilesError, SaveProfileCommandError, SaveProfileError,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

/// Applies one dashboard event and answers with the re-rendered view.
///
/// Body: `{"type": "<event>", "value": <payload>}`, e.g.
/// `{"type": "set_skill_level", "value": {"skill": "Python", "level": 8}}`.
#[post("/api/session/events")]
pub async fn dispatch_event_handler(
    event: web::Json<FormEvent>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.session.dispatch(event.into_inner()).await {
        Ok(view) => ApiResponse::success(view),
        Err(err) => map_session_error(err),
    }
}

pub(crate) fn map_session_error(err: DashboardSessionError) -> HttpResponse {
    let message = err.to_string();
    match err {
        DashboardSessionError::Form(FormError::SkillNotSelected(_)) => {
            ApiResponse::bad_request("SKILL_NOT_SELECTED", &message)
        }
        DashboardSessionError::Form(FormError::Proficiency(_)) => {
            ApiResponse::bad_request("INVALID_PROFICIENCY", &message)
        }
        DashboardSessionError::Form(FormError::Attachment(_))
        | DashboardSessionError::Command(SaveProfileCommandError::InvalidAttachment(_)) => {
            ApiResponse::bad_request("INVALID_ATTACHMENT", &message)
        }
        DashboardSessionError::Save(SaveProfileError::StoreFailed(msg))
        | DashboardSessionError::List(ListProfilesError::QueryFailed(msg)) => {
            error!("Dashboard session store error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
