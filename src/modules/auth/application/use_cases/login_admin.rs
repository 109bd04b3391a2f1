use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::{digest, AdminCredentials, AdminSecret};
use crate::auth::application::ports::outgoing::{IssuedToken, PasswordHasher, TokenProvider};

// ========================= Login Request =========================
#[derive(Debug, Clone)]
pub struct AdminLoginRequest {
    pub id: String,
    pub password: String,
}

// ====================== Login Error =============================
#[derive(Debug, Clone)]
pub enum AdminLoginError {
    InvalidCredentials,
    PasswordVerificationFailed(String),
    TokenGenerationFailed(String),
}

impl std::fmt::Display for AdminLoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminLoginError::InvalidCredentials => write!(f, "Invalid credentials"),
            AdminLoginError::PasswordVerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            AdminLoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AdminLoginError {}

// ============================ Login Use Case =============================
#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: AdminLoginRequest) -> Result<IssuedToken, AdminLoginError>;
}

#[derive(Clone)]
pub struct LoginAdminUseCase {
    credentials: AdminCredentials,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl LoginAdminUseCase {
    pub fn new(
        credentials: AdminCredentials,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            credentials,
            password_hasher,
            token_provider,
        }
    }

    async fn password_matches(&self, password: &str) -> Result<bool, AdminLoginError> {
        match self.credentials.secret() {
            AdminSecret::PlainDigest(expected) => Ok(digest(password) == *expected),
            AdminSecret::Argon2Hash(hash) => self
                .password_hasher
                .verify_password(password, hash)
                .await
                .map_err(|e| AdminLoginError::PasswordVerificationFailed(e.to_string())),
        }
    }
}

#[async_trait]
impl ILoginAdminUseCase for LoginAdminUseCase {
    async fn execute(&self, request: AdminLoginRequest) -> Result<IssuedToken, AdminLoginError> {
        // Both checks always run so a wrong id costs the same as a wrong password.
        let id_ok = self.credentials.matches_id(&request.id);
        let password_ok = self.password_matches(&request.password).await?;

        if !(id_ok && password_ok) {
            return Err(AdminLoginError::InvalidCredentials);
        }

        self.token_provider
            .issue_admin_token()
            .map_err(|e| AdminLoginError::TokenGenerationFailed(e.to_string()))
    }
}
