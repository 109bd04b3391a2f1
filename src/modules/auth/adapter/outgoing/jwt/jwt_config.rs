use crate::config::{self, ConfigError};

const MIN_SECRET_LEN: usize = 32;
const DEFAULT_SESSION_EXPIRY: i64 = 86400;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = config::required("JWT_SECRET")?;

        // HS256 requires at least 32 bytes of key material
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!("must be at least {MIN_SECRET_LEN} characters long"),
            });
        }

        let session_expiry = config::parse_or("JWT_ACCESS_EXPIRY", DEFAULT_SESSION_EXPIRY)?;
        if session_expiry <= 0 || session_expiry > 7 * DEFAULT_SESSION_EXPIRY {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: "must be between 1 and 604800 seconds".to_string(),
            });
        }

        let issuer =
            std::env::var("JWT_ISSUER").unwrap_or_else(|_| "portfolio-cms".to_string());

        Ok(Self {
            secret_key,
            issuer,
            session_expiry,
        })
    }
}
