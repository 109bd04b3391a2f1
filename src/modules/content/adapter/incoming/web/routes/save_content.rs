use actix_web::{put, web, Responder};
use serde_json::Value;
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::application::ports::incoming::use_cases::SaveContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Save site content
///
/// Normalizes the submitted document and upserts it under the singleton
/// key. `_id`, `createdAt`, `updatedAt` and `slug` in the body are ignored.
#[utoipa::path(
    put,
    path = "/api/content",
    tag = "content",
    request_body(content = Object, description = "Partial or full content document"),
    responses(
        (status = 200, description = "Saved, normalized document", body = crate::api::schemas::ContentEnvelope),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/content")]
pub async fn save_content_handler(
    _admin: AdminUser,
    req: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.save.execute(req.into_inner()).await {
        Ok(document) => ApiResponse::success(document),

        Err(SaveContentError::InvalidBody) => {
            ApiResponse::bad_request("INVALID_BODY", "Invalid body")
        }

        Err(SaveContentError::RepositoryError(e)) => {
            error!(error = %e, "Failed to save content");
            ApiResponse::internal_error()
        }
    }
}
