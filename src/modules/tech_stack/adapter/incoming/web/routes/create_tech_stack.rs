use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::tech_stack::adapter::incoming::web::routes::tech_stack_error_response;
use crate::modules::tech_stack::application::domain::entities::TechStack;
use crate::modules::tech_stack::application::ports::incoming::use_cases::TechStackDraft;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct CreateTechStackRequest {
    pub name: String,
    /// languages | backend | frontend | tools | concepts
    pub category: Option<String>,
}

/// Create a tech stack entry
#[utoipa::path(
    post,
    path = "/api/techstacks",
    tag = "techstacks",
    request_body = CreateTechStackRequest,
    responses(
        (status = 201, description = "Entry created", body = TechStack),
        (status = 400, description = "Missing name or invalid category", body = ErrorResponse),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/techstacks")]
pub async fn create_tech_stack_handler(
    _admin: AdminUser,
    req: web::Json<CreateTechStackRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let draft = TechStackDraft {
        name: req.name,
        category: req.category,
    };

    match data.tech_stack.create.execute(draft).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => tech_stack_error_response(e),
    }
}
