use actix_web::{get, web, Responder};

use crate::api::schemas::ErrorResponse;
use crate::modules::tech_stack::adapter::incoming::web::routes::tech_stack_error_response;
use crate::modules::tech_stack::application::domain::entities::TechStack;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List tech stack entries, newest first
#[utoipa::path(
    get,
    path = "/api/techstacks",
    tag = "techstacks",
    responses(
        (status = 200, description = "All tech stack entries", body = [TechStack]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/techstacks")]
pub async fn list_tech_stacks_handler(data: web::Data<AppState>) -> impl Responder {
    match data.tech_stack.list.execute().await {
        Ok(list) => ApiResponse::success(list),
        Err(e) => tech_stack_error_response(e),
    }
}
