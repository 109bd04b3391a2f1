use actix_web::{delete, web, Responder};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::adapter::incoming::web::routes::{
    parse_project_id, project_error_response,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a project
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = match parse_project_id(&path) {
        Ok(id) => id,
        Err(e) => return project_error_response(e),
    };

    match data.project.delete.execute(id).await {
        Ok(()) => ApiResponse::<()>::no_content(),
        Err(e) => project_error_response(e),
    }
}
