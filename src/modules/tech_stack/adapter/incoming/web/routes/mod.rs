mod create_tech_stack;
mod delete_tech_stack;
mod list_tech_stacks;
mod update_tech_stack;

pub use create_tech_stack::*;
pub use delete_tech_stack::*;
pub use list_tech_stacks::*;
pub use update_tech_stack::*;

use actix_web::HttpResponse;
use tracing::error;
use uuid::Uuid;

use crate::modules::tech_stack::application::ports::incoming::use_cases::TechStackError;
use crate::shared::api::ApiResponse;

pub(crate) fn tech_stack_error_response(err: TechStackError) -> HttpResponse {
    match err {
        TechStackError::Validation(e) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        TechStackError::NotFound => ApiResponse::not_found("NOT_FOUND", "Tech stack not found"),
        TechStackError::RepositoryError(e) => {
            error!(error = %e, "Tech stack repository error");
            ApiResponse::internal_error()
        }
    }
}

pub(crate) fn parse_tech_stack_id(raw: &str) -> Result<Uuid, TechStackError> {
    Uuid::parse_str(raw).map_err(|_| TechStackError::NotFound)
}
