use actix_web::{get, web, Responder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    profile::application::{
        domain::entities::{CertificateName, ProfileRecord, SkillRatings},
        ports::incoming::use_cases::ListProfilesError,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

/// A saved profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    #[schema(example = "Asha")]
    pub name: String,

    #[schema(example = "2001-05-01")]
    pub date_of_birth: NaiveDate,

    pub bio: String,

    /// Skill name to proficiency (0-10)
    #[schema(value_type = Object, example = json!({"Python": 8, "SQL": 6}))]
    pub skills: SkillRatings,

    #[schema(example = "Tracker")]
    pub project_title: String,

    #[schema(example = "A tracker app")]
    pub project_description: String,

    /// Certificate file name, "None" when no certificate was attached
    #[schema(value_type = String, example = "None")]
    pub certificate_name: CertificateName,
}

impl From<ProfileRecord> for ProfileResponse {
    fn from(record: ProfileRecord) -> Self {
        Self {
            name: record.name,
            date_of_birth: record.date_of_birth,
            bio: record.bio,
            skills: record.skills,
            project_title: record.project_title,
            project_description: record.project_description,
            certificate_name: record.certificate_name,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// List all saved profiles
///
/// Returns every profile saved in this process, oldest first.
#[utoipa::path(
    get,
    path = "/api/profiles",
    tag = "profiles",
    responses(
        (
            status = 200,
            description = "Saved profiles in insertion order",
            body = inline(SuccessResponse<Vec<ProfileResponse>>)
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/profiles")]
pub async fn list_profiles_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.list.execute().await {
        Ok(records) => {
            let response = records
                .into_iter()
                .map(ProfileResponse::from)
                .collect::<Vec<_>>();

            ApiResponse::success(response)
        }

        Err(err) => map_list_profiles_error(err),
    }
}

fn map_list_profiles_error(err: ListProfilesError) -> actix_web::HttpResponse {
    match err {
        ListProfilesError::QueryFailed(msg) => {
            error!("Failed to list profiles: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
