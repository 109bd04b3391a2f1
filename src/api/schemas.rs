// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::content::domain::ContentDocument;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Envelope for the content endpoints. `data` is null before the first save.
#[derive(Serialize, ToSchema)]
pub struct ContentEnvelope {
    #[schema(example = true)]
    pub success: bool,
    pub data: Option<ContentDocument>,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "title and description are required")]
    pub message: String,
}
