use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::content::application::ports::incoming::use_cases::GetContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Site content
///
/// Returns the normalized content document, or `data: null` when nothing
/// has been saved or seeded yet.
#[utoipa::path(
    get,
    path = "/api/content",
    tag = "content",
    responses(
        (status = 200, description = "Normalized document or null", body = crate::api::schemas::ContentEnvelope),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/content")]
pub async fn get_content_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.get.execute().await {
        Ok(document) => ApiResponse::success(document),

        Err(GetContentError::RepositoryError(e)) => {
            error!(error = %e, "Failed to fetch content");
            ApiResponse::internal_error()
        }
    }
}
