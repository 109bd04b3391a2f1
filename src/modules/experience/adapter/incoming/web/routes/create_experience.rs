use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::domain::document::LinkItem;
use crate::modules::experience::adapter::incoming::web::routes::experience_error_response;
use crate::modules::experience::application::domain::entities::{Experience, ExperienceDraft};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct CreateExperienceRequest {
    /// work | leadership | project
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: String,
    pub org: String,
    pub period: String,
    pub summary: String,
    pub highlights: Vec<String>,
    pub tags: Vec<String>,
    pub links: Vec<LinkItem>,
}

impl From<CreateExperienceRequest> for ExperienceDraft {
    fn from(req: CreateExperienceRequest) -> Self {
        ExperienceDraft {
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

/// Create an experience entry
#[utoipa::path(
    post,
    path = "/api/experiences",
    tag = "experiences",
    request_body = CreateExperienceRequest,
    responses(
        (status = 201, description = "Experience created", body = Experience),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/experiences")]
pub async fn create_experience_handler(
    _admin: AdminUser,
    req: web::Json<CreateExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.create.execute(req.into_inner().into()).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => experience_error_response(e),
    }
}
