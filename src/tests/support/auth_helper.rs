use actix_web::web;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::{
    AdminClaims, TokenProvider, ADMIN_SUBJECT,
};

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";
pub const TEST_ISSUER: &str = "portfolio-cms-test";

pub fn jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: TEST_SECRET.to_string(),
        issuer: TEST_ISSUER.to_string(),
        session_expiry: 3600,
    })
}

pub fn admin_token() -> String {
    jwt_service()
        .issue_admin_token()
        .expect("test token should sign")
        .token
}

/// Correctly signed, but without the admin claim.
pub fn non_admin_token() -> String {
    let now = Utc::now().timestamp();
    let claims = AdminClaims {
        sub: ADMIN_SUBJECT.to_string(),
        admin: false,
        iss: TEST_ISSUER.to_string(),
        exp: now + 3600,
        iat: now,
        nbf: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("test token should sign")
}

pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service());
    web::Data::new(provider)
}
