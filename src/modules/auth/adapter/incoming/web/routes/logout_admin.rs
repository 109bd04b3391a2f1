use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::info;

use crate::shared::api::response::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct LogoutResponseBody {
    message: &'static str,
}

/// Clears the admin session cookie. Always succeeds.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses((status = 200, description = "Session cookie cleared"))
)]
#[post("/api/auth/logout")]
pub async fn logout_admin_handler(data: web::Data<AppState>) -> impl Responder {
    info!("Admin logged out");

    HttpResponse::Ok()
        .cookie(data.session_cookie.removal())
        .json(ApiResponse {
            success: true,
            data: Some(LogoutResponseBody {
                message: "Logged out successfully",
            }),
            error: None,
        })
}
