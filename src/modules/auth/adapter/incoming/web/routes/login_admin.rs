use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_admin::{AdminLoginError, AdminLoginRequest};
use crate::shared::api::response::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct AdminLoginRequestDto {
    /// Admin id configured on the server
    #[schema(example = "admin")]
    pub id: String,

    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminSessionResponse {
    /// JWT also set as the `adminToken` cookie
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    /// Seconds until the session expires
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Admin login
///
/// Checks the configured admin credentials and starts a session.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = AdminLoginRequestDto,
    responses(
        (status = 200, description = "Session started, cookie set", body = inline(SuccessResponse<AdminSessionResponse>)),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid credentials" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_admin_handler(
    req: web::Json<AdminLoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let request = AdminLoginRequest {
        id: dto.id,
        password: dto.password,
    };

    match data.login_admin.execute(request).await {
        Ok(issued) => {
            info!("Admin logged in");
            let cookie = data
                .session_cookie
                .session(issued.token.clone(), issued.expires_in);

            HttpResponse::Ok().cookie(cookie).json(ApiResponse {
                success: true,
                data: Some(AdminSessionResponse {
                    access_token: issued.token,
                    expires_in: issued.expires_in,
                }),
                error: None,
            })
        }

        Err(AdminLoginError::InvalidCredentials) => {
            warn!("Admin login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid credentials")
        }

        Err(e) => {
            error!(error = %e, "Admin login failed");
            ApiResponse::internal_error()
        }
    }
}
