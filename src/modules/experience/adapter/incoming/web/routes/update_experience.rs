use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::domain::document::LinkItem;
use crate::modules::experience::adapter::incoming::web::routes::{
    experience_error_response, parse_experience_id,
};
use crate::modules::experience::application::domain::entities::{Experience, ExperienceChanges};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct UpdateExperienceRequest {
    /// Unknown values are ignored
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub org: Option<String>,
    pub period: Option<String>,
    pub summary: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub links: Option<Vec<LinkItem>>,
}

impl From<UpdateExperienceRequest> for ExperienceChanges {
    fn from(req: UpdateExperienceRequest) -> Self {
        ExperienceChanges {
            kind: req.kind,
            title: req.title,
            org: req.org,
            period: req.period,
            summary: req.summary,
            highlights: req.highlights,
            tags: req.tags,
            links: req.links,
        }
    }
}

/// Update an experience entry
#[utoipa::path(
    put,
    path = "/api/experiences/{id}",
    tag = "experiences",
    params(("id" = String, Path, description = "Experience id")),
    request_body = UpdateExperienceRequest,
    responses(
        (status = 200, description = "Experience updated", body = Experience),
        (status = 400, description = "Validation error or empty patch", body = ErrorResponse),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse),
        (status = 404, description = "Experience not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/experiences/{id}")]
pub async fn update_experience_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<UpdateExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = match parse_experience_id(&path) {
        Ok(id) => id,
        Err(e) => return experience_error_response(e),
    };

    match data.experience.update.execute(id, req.into_inner().into()).await {
        Ok(exp) => ApiResponse::success(exp),
        Err(e) => experience_error_response(e),
    }
}
