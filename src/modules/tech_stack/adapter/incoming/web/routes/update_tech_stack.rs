use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::tech_stack::adapter::incoming::web::routes::{
    parse_tech_stack_id, tech_stack_error_response,
};
use crate::modules::tech_stack::application::domain::entities::{TechStack, TechStackChanges};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct UpdateTechStackRequest {
    pub name: Option<String>,
    pub category: Option<String>,
}

/// Update a tech stack entry
#[utoipa::path(
    put,
    path = "/api/techstacks/{id}",
    tag = "techstacks",
    params(("id" = String, Path, description = "Tech stack id")),
    request_body = UpdateTechStackRequest,
    responses(
        (status = 200, description = "Entry updated", body = TechStack),
        (status = 400, description = "Validation error or empty patch", body = ErrorResponse),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse),
        (status = 404, description = "Entry not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/techstacks/{id}")]
pub async fn update_tech_stack_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<UpdateTechStackRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = match parse_tech_stack_id(&path) {
        Ok(id) => id,
        Err(e) => return tech_stack_error_response(e),
    };

    let req = req.into_inner();
    let changes = TechStackChanges {
        name: req.name,
        category: req.category,
    };

    match data.tech_stack.update.execute(id, changes).await {
        Ok(tech) => ApiResponse::success(tech),
        Err(e) => tech_stack_error_response(e),
    }
}
