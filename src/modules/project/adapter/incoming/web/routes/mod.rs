mod create_project;
mod delete_project;
mod list_projects;
mod update_project;

pub use create_project::*;
pub use delete_project::*;
pub use list_projects::*;
pub use update_project::*;

use actix_web::HttpResponse;
use tracing::error;
use uuid::Uuid;

use crate::modules::project::application::ports::incoming::use_cases::ProjectError;
use crate::shared::api::ApiResponse;

pub(crate) fn project_error_response(err: ProjectError) -> HttpResponse {
    match err {
        ProjectError::Validation(e) => ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),

        ProjectError::NotFound => ApiResponse::not_found("NOT_FOUND", "Project not found"),

        ProjectError::RepositoryError(e) => {
            error!(error = %e, "Project repository error");
            ApiResponse::internal_error()
        }
    }
}

/// Ids that are not UUIDs cannot exist, so they map to not found.
pub(crate) fn parse_project_id(raw: &str) -> Result<Uuid, ProjectError> {
    Uuid::parse_str(raw).map_err(|_| ProjectError::NotFound)
}
