use actix_web::{post, web, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::seed::application::ports::incoming::use_cases::{SeedError, SeedReport};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SeedRequest {
    pub force: bool,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SeedQuery {
    /// `1` or `true` forces a reseed
    pub force: Option<String>,
}

impl SeedQuery {
    fn forced(&self) -> bool {
        matches!(self.force.as_deref(), Some("1") | Some("true"))
    }
}

/// Seed placeholder portfolio data
///
/// Refuses with 409 when anything already exists unless `force` is set,
/// in which case every collection is wiped and reseeded.
#[utoipa::path(
    post,
    path = "/api/admin/seed",
    tag = "admin",
    params(SeedQuery),
    request_body(content = SeedRequest, description = "Optional body; `force` may also come from the query"),
    responses(
        (status = 200, description = "Seeded", body = SeedReport),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse),
        (status = 409, description = "Data already present", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/seed")]
pub async fn seed_portfolio_handler(
    _admin: AdminUser,
    query: web::Query<SeedQuery>,
    body: Option<web::Json<SeedRequest>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let force = query.forced() || body.map(|b| b.force).unwrap_or(false);

    match data.seed.execute(force).await {
        Ok(report) => ApiResponse::success(report),

        Err(SeedError::AlreadySeeded(existing)) => ApiResponse::conflict(
            "ALREADY_SEEDED",
            "Portfolio data already exists. Pass force=true to overwrite it.",
            json!(existing),
        ),

        Err(SeedError::RepositoryError(e)) => {
            error!(error = %e, "Seeding failed");
            ApiResponse::internal_error()
        }
    }
}
