mod create_experience;
mod delete_experience;
mod list_experiences;
mod update_experience;

pub use create_experience::*;
pub use delete_experience::*;
pub use list_experiences::*;
pub use update_experience::*;

use actix_web::HttpResponse;
use tracing::error;
use uuid::Uuid;

use crate::modules::experience::application::ports::incoming::use_cases::ExperienceError;
use crate::shared::api::ApiResponse;

pub(crate) fn experience_error_response(err: ExperienceError) -> HttpResponse {
    match err {
        ExperienceError::Validation(e) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        ExperienceError::NotFound => ApiResponse::not_found("NOT_FOUND", "Experience not found"),
        ExperienceError::RepositoryError(e) => {
            error!(error = %e, "Experience repository error");
            ApiResponse::internal_error()
        }
    }
}

pub(crate) fn parse_experience_id(raw: &str) -> Result<Uuid, ExperienceError> {
    Uuid::parse_str(raw).map_err(|_| ExperienceError::NotFound)
}
