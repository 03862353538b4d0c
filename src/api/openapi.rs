use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::health::HealthResponse;
use crate::profile::adapter::incoming::web::routes::{
    AttachmentRequest, ProfileResponse, SaveProfileRequest,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Dashboard API",
        version = "0.1.0",
        description = "Student portfolio dashboard: profile editing session and saved profiles"
    ),
    paths(
        // Health
        crate::health::health,

        // Profile endpoints
        crate::profile::adapter::incoming::web::routes::save_profile::save_profile_handler,
        crate::profile::adapter::incoming::web::routes::list_profiles::list_profiles_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            HealthResponse,

            // Profile DTOs
            SaveProfileRequest,
            AttachmentRequest,
            ProfileResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "profiles", description = "Saved student profiles"),
    )
)]
pub struct ApiDoc;
