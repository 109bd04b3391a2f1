use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::portfolio::application::ports::incoming::use_cases::ReadyPortfolio;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public portfolio page data
///
/// `status` is `not_seeded` until the content document exists; otherwise
/// `ready` with the fields below.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (status = 200, description = "Page view model", body = ReadyPortfolio),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.execute().await {
        Ok(view) => ApiResponse::success(view),
        Err(e) => {
            error!(error = %e, "Failed to build portfolio view");
            ApiResponse::internal_error()
        }
    }
}
