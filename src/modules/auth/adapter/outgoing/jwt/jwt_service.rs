use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;

use crate::auth::application::ports::outgoing::token_provider::{
    AdminClaims, IssuedToken, TokenError, TokenProvider, ADMIN_SUBJECT,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("config", &"JwtConfig")
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn sign(&self, claims: &AdminClaims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn issue_admin_token(&self) -> Result<IssuedToken, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.session_expiry);

        let claims = AdminClaims {
            sub: ADMIN_SUBJECT.to_string(),
            admin: true,
            iss: self.config.issuer.clone(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
        };

        Ok(IssuedToken {
            token: self.sign(&claims)?,
            expires_in: self.config.session_expiry,
        })
    }

    fn verify_admin_token(&self, token: &str) -> Result<AdminClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[&self.config.issuer]);

        let decoded = decode::<AdminClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;

            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token verification failed: Token expired");
                    TokenError::TokenExpired
                }
                ErrorKind::ImmatureSignature => {
                    tracing::warn!("Token verification failed: Token not yet valid");
                    TokenError::TokenNotYetValid
                }
                ErrorKind::InvalidSignature => {
                    tracing::error!("Security alert: Invalid token signature detected");
                    TokenError::InvalidSignature
                }
                ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                    tracing::error!("Security alert: Malformed or invalid algorithm token");
                    TokenError::MalformedToken
                }
                _ => {
                    tracing::warn!(error = %e, "Token verification failed");
                    TokenError::MalformedToken
                }
            }
        })?;

        let claims = decoded.claims;
        if !claims.admin || claims.sub != ADMIN_SUBJECT {
            tracing::warn!(sub = %claims.sub, "Token without admin rights rejected");
            return Err(TokenError::NotAdmin);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_for_testing_purposes_only";

    fn service_with_expiry(session_expiry: i64) -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: SECRET.to_string(),
            issuer: "portfolio-test".to_string(),
            session_expiry,
        })
    }

    #[test]
    fn issued_token_verifies_as_admin() {
        let service = service_with_expiry(86400);

        let issued = service.issue_admin_token().unwrap();
        assert_eq!(issued.expires_in, 86400);

        let claims = service.verify_admin_token(&issued.token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert!(claims.admin);
        assert_eq!(claims.iss, "portfolio-test");
        assert_eq!(claims.exp - claims.iat, 86400);
    }

    #[test]
    fn garbage_token_is_malformed() {
        let service = service_with_expiry(3600);

        let result = service.verify_admin_token("invalid.jwt.token");

        assert!(matches!(result.unwrap_err(), TokenError::MalformedToken));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Beyond the 30s leeway.
        let service = service_with_expiry(-35);
        let issued = service.issue_admin_token().unwrap();

        let result = service.verify_admin_token(&issued.token);

        assert!(matches!(result.unwrap_err(), TokenError::TokenExpired));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let service = service_with_expiry(3600);
        let other = JwtTokenService::new(JwtConfig {
            secret_key: format!("{SECRET}_DIFFERENT"),
            issuer: "portfolio-test".to_string(),
            session_expiry: 3600,
        });
        let issued = other.issue_admin_token().unwrap();

        let result = service.verify_admin_token(&issued.token);

        assert!(matches!(result.unwrap_err(), TokenError::InvalidSignature));
    }

    #[test]
    fn token_without_admin_claim_is_rejected() {
        let service = service_with_expiry(3600);
        let now = Utc::now().timestamp();
        let token = service
            .sign(&AdminClaims {
                sub: "admin".to_string(),
                admin: false,
                iss: "portfolio-test".to_string(),
                exp: now + 3600,
                iat: now,
                nbf: now,
            })
            .unwrap();

        let result = service.verify_admin_token(&token);

        assert!(matches!(result.unwrap_err(), TokenError::NotAdmin));
    }

    #[test]
    fn token_from_other_issuer_is_rejected() {
        let service = service_with_expiry(3600);
        let other = JwtTokenService::new(JwtConfig {
            secret_key: SECRET.to_string(),
            issuer: "someone-else".to_string(),
            session_expiry: 3600,
        });
        let issued = other.issue_admin_token().unwrap();

        assert!(service.verify_admin_token(&issued.token).is_err());
    }
}
