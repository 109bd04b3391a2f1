use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::adapter::incoming::web::routes::{
    parse_project_id, project_error_response,
};
use crate::modules::project::application::domain::entities::{Project, ProjectChanges};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Omitted fields are left unchanged; `""` clears an optional text field.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub role: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    pub highlights: Option<Vec<String>>,
}

impl From<UpdateProjectRequest> for ProjectChanges {
    fn from(req: UpdateProjectRequest) -> Self {
        ProjectChanges {
            title: req.title,
            description: req.description,
            long_description: req.long_description,
            role: req.role,
            technologies: req.technologies,
            demo_url: req.demo_url,
            github_url: req.github_url,
            image_url: req.image_url,
            highlights: req.highlights,
        }
    }
}

/// Update a project
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project id")),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = Project),
        (status = 400, description = "Validation error or empty patch", body = ErrorResponse),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<UpdateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = match parse_project_id(&path) {
        Ok(id) => id,
        Err(e) => return project_error_response(e),
    };

    match data.project.update.execute(id, req.into_inner().into()).await {
        Ok(project) => ApiResponse::success(project),
        Err(e) => project_error_response(e),
    }
}
