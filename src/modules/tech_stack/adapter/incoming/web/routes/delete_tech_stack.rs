use actix_web::{delete, web, Responder};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::tech_stack::adapter::incoming::web::routes::{
    parse_tech_stack_id, tech_stack_error_response,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a tech stack entry
#[utoipa::path(
    delete,
    path = "/api/techstacks/{id}",
    tag = "techstacks",
    params(("id" = String, Path, description = "Tech stack id")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse),
        (status = 404, description = "Entry not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/techstacks/{id}")]
pub async fn delete_tech_stack_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = match parse_tech_stack_id(&path) {
        Ok(id) => id,
        Err(e) => return tech_stack_error_response(e),
    };

    match data.tech_stack.delete.execute(id).await {
        Ok(()) => ApiResponse::<()>::no_content(),
        Err(e) => tech_stack_error_response(e),
    }
}
