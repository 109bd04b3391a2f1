use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::adapter::incoming::web::session_cookie::ADMIN_COOKIE;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Proof that the request carries a valid admin session, taken from
/// `Authorization: Bearer` or the `adminToken` cookie.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub subject: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn unauthorized() -> ActixError {
    create_api_error(ApiResponse::unauthorized("UNAUTHORIZED", "Unauthorized"))
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(provider) => provider,
                None => {
                    tracing::error!("Token provider missing from app data");
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req).or_else(|| extract_token_from_cookie(req)) {
            Some(t) => t,
            None => return ready(Err(unauthorized())),
        };

        match token_provider.verify_admin_token(&token) {
            Ok(claims) => ready(Ok(AdminUser { subject: claims.sub })),
            Err(e) => {
                tracing::debug!(error = %e, "Admin token rejected");
                ready(Err(unauthorized()))
            }
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

fn extract_token_from_cookie(req: &HttpRequest) -> Option<String> {
    req.cookie(ADMIN_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::{get, http::StatusCode, test, App, Responder};

    use crate::tests::support::auth_helper::{
        admin_token, non_admin_token, token_provider_data,
    };

    #[get("/guarded")]
    async fn guarded(admin: AdminUser) -> impl Responder {
        admin.subject
    }

    #[actix_web::test]
    async fn bearer_token_is_accepted() {
        let app = test::init_service(App::new().app_data(token_provider_data()).service(guarded)).await;

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", format!("Bearer {}", admin_token())))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, "admin");
    }

    #[actix_web::test]
    async fn cookie_token_is_accepted() {
        let app = test::init_service(App::new().app_data(token_provider_data()).service(guarded)).await;

        let req = test::TestRequest::get()
            .uri("/guarded")
            .cookie(Cookie::new(ADMIN_COOKIE, admin_token()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn missing_token_is_unauthorized() {
        let app = test::init_service(App::new().app_data(token_provider_data()).service(guarded)).await;

        let req = test::TestRequest::get().uri("/guarded").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
        assert_eq!(body["error"]["message"], "Unauthorized");
    }

    #[actix_web::test]
    async fn invalid_and_non_admin_tokens_are_unauthorized() {
        let app = test::init_service(App::new().app_data(token_provider_data()).service(guarded)).await;

        for token in ["not-a-jwt".to_string(), non_admin_token()] {
            let req = test::TestRequest::get()
                .uri("/guarded")
                .insert_header(("Authorization", format!("Bearer {token}")))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[actix_web::test]
    async fn missing_token_provider_is_internal_error() {
        let app = test::init_service(App::new().service(guarded)).await;

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", format!("Bearer {}", admin_token())))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
