use std::collections::BTreeMap;

use actix_web::{post, web, HttpResponse, Responder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    profile::{
        adapter::incoming::web::routes::list_profiles::ProfileResponse,
        application::{
            domain::{
                entities::{
                    ProficiencyError, ProficiencyLevel, Skill, SkillParseError, SkillRatings,
                    StagedAttachment,
                },
                form::{ProfileForm, DEFAULT_DATE_OF_BIRTH},
            },
            ports::incoming::use_cases::{
                SaveProfileCommand, SaveProfileCommandError, SaveProfileError,
            },
        },
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Metadata of an uploaded file. File contents never reach the server.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttachmentRequest {
    #[schema(example = "aws.pdf")]
    pub file_name: String,

    #[schema(example = "application/pdf")]
    pub content_type: String,

    #[schema(example = 52_400)]
    pub size_bytes: u64,
}

impl From<AttachmentRequest> for StagedAttachment {
    fn from(req: AttachmentRequest) -> Self {
        Self {
            file_name: req.file_name,
            content_type: req.content_type,
            size_bytes: req.size_bytes,
        }
    }
}

/// A complete profile submission. Every field is optional and falls back
/// to the dashboard's initial value.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SaveProfileRequest {
    #[schema(example = "Asha")]
    pub name: String,

    #[schema(example = "2001-05-01")]
    pub date_of_birth: NaiveDate,

    pub bio: String,

    #[schema(example = json!({"Python": 8, "SQL": 6}))]
    pub skills: BTreeMap<String, i64>,

    #[schema(example = "Tracker")]
    pub project_title: String,

    #[schema(example = "A tracker app")]
    pub project_description: String,

    pub photo: Option<AttachmentRequest>,

    pub certificate: Option<AttachmentRequest>,
}

impl Default for SaveProfileRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            date_of_birth: DEFAULT_DATE_OF_BIRTH,
            bio: String::new(),
            skills: BTreeMap::new(),
            project_title: String::new(),
            project_description: String::new(),
            photo: None,
            certificate: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum SaveProfileRequestError {
    #[error(transparent)]
    Skill(#[from] SkillParseError),

    #[error("Skill {0} given more than once")]
    DuplicateSkill(Skill),

    #[error(transparent)]
    Proficiency(#[from] ProficiencyError),
}

impl SaveProfileRequest {
    fn into_form(self) -> Result<ProfileForm, SaveProfileRequestError> {
        // "Node js" and "Node.js" are distinct keys naming the same skill
        let mut skills = SkillRatings::new();
        for (name, level) in self.skills {
            let skill = name.parse::<Skill>()?;
            if skills.contains(skill) {
                return Err(SaveProfileRequestError::DuplicateSkill(skill));
            }
            skills.rate(skill, ProficiencyLevel::new(level)?);
        }

        Ok(ProfileForm {
            name: self.name,
            date_of_birth: self.date_of_birth,
            bio: self.bio,
            photo: self.photo.map(StagedAttachment::from),
            skills,
            project_title: self.project_title,
            project_description: self.project_description,
            certificate: self.certificate.map(StagedAttachment::from),
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Save a profile
///
/// Appends one profile to the store. A missing certificate is stored as "None".
#[utoipa::path(
    post,
    path = "/api/profiles",
    tag = "profiles",
    request_body = SaveProfileRequest,
    responses(
        (
            status = 201,
            description = "Profile saved",
            body = inline(SuccessResponse<ProfileResponse>)
        ),
        (status = 400, description = "Unknown skill, proficiency out of range or rejected attachment", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/profiles")]
pub async fn save_profile_handler(
    req: web::Json<SaveProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = match req.into_inner().into_form() {
        Ok(form) => form,
        Err(e @ SaveProfileRequestError::Skill(_))
        | Err(e @ SaveProfileRequestError::DuplicateSkill(_)) => {
            return ApiResponse::bad_request("INVALID_SKILL", &e.to_string())
        }
        Err(SaveProfileRequestError::Proficiency(e)) => {
            return ApiResponse::bad_request("INVALID_PROFICIENCY", &e.to_string())
        }
    };

    let command = match SaveProfileCommand::new(&form, &data.attachment_policy) {
        Ok(command) => command,
        Err(SaveProfileCommandError::InvalidAttachment(e)) => {
            return ApiResponse::bad_request("INVALID_ATTACHMENT", &e.to_string())
        }
    };

    match data.profile.save.execute(command).await {
        Ok(record) => ApiResponse::created(ProfileResponse::from(record)),
        Err(err) => map_save_profile_error(err),
    }
}

fn map_save_profile_error(err: SaveProfileError) -> HttpResponse {
    match err {
        SaveProfileError::StoreFailed(msg) => {
            error!("Failed to save profile: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
