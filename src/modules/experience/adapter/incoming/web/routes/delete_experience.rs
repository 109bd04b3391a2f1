use actix_web::{delete, web, Responder};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::experience::adapter::incoming::web::routes::{
    experience_error_response, parse_experience_id,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete an experience entry
#[utoipa::path(
    delete,
    path = "/api/experiences/{id}",
    tag = "experiences",
    params(("id" = String, Path, description = "Experience id")),
    responses(
        (status = 204, description = "Experience deleted"),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse),
        (status = 404, description = "Experience not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/experiences/{id}")]
pub async fn delete_experience_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = match parse_experience_id(&path) {
        Ok(id) => id,
        Err(e) => return experience_error_response(e),
    };

    match data.experience.delete.execute(id).await {
        Ok(()) => ApiResponse::<()>::no_content(),
        Err(e) => experience_error_response(e),
    }
}
