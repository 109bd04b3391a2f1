use actix_web::{get, web, Responder};

use crate::api::schemas::ErrorResponse;
use crate::modules::experience::adapter::incoming::web::routes::experience_error_response;
use crate::modules::experience::application::domain::entities::Experience;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List experiences, newest first
#[utoipa::path(
    get,
    path = "/api/experiences",
    tag = "experiences",
    responses(
        (status = 200, description = "All experiences", body = [Experience]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/experiences")]
pub async fn list_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experience.list.execute().await {
        Ok(list) => ApiResponse::success(list),
        Err(e) => experience_error_response(e),
    }
}
