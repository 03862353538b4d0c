use serde::Serialize;
use utoipa::ToSchema;

/// Envelope of every successful API response
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope of every failed API response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code for programmatic handling
    #[schema(example = "INVALID_PROFICIENCY")]
    pub code: String,

    #[schema(example = "Proficiency must be between 0 and 10, got 11")]
    pub message: String,
}
