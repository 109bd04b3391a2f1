use actix_web::{get, web, Responder};

use crate::api::schemas::ErrorResponse;
use crate::modules::project::adapter::incoming::web::routes::project_error_response;
use crate::modules::project::application::domain::entities::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List projects, newest first
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects", body = [Project]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn list_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.list.execute().await {
        Ok(projects) => ApiResponse::success(projects),
        Err(e) => project_error_response(e),
    }
}
