use sha2::{Digest, Sha256};

use crate::config::{self, ConfigError};

/// How the admin password is held in configuration.
#[derive(Clone)]
pub enum AdminSecret {
    /// SHA-256 of a plain password from `ADMIN_PASSWORD`.
    PlainDigest([u8; 32]),
    /// Argon2 PHC string from `ADMIN_PASSWORD_HASH`.
    Argon2Hash(String),
}

/// The single administrator allowed to edit the site.
#[derive(Clone)]
pub struct AdminCredentials {
    id_digest: [u8; 32],
    secret: AdminSecret,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("id", &"<redacted>")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl AdminCredentials {
    pub fn with_plain_password(id: &str, password: &str) -> Self {
        Self {
            id_digest: digest(id),
            secret: AdminSecret::PlainDigest(digest(password)),
        }
    }

    pub fn with_password_hash(id: &str, hash: impl Into<String>) -> Self {
        Self {
            id_digest: digest(id),
            secret: AdminSecret::Argon2Hash(hash.into()),
        }
    }

    /// `ADMIN_PASSWORD_HASH` wins over `ADMIN_PASSWORD` when both are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let id = config::required("ADMIN_ID")?;

        if let Ok(hash) = config::required("ADMIN_PASSWORD_HASH") {
            return Ok(Self::with_password_hash(&id, hash));
        }

        let password = config::required("ADMIN_PASSWORD")?;
        Ok(Self::with_plain_password(&id, &password))
    }

    pub fn matches_id(&self, id: &str) -> bool {
        digest(id) == self.id_digest
    }

    pub fn secret(&self) -> &AdminSecret {
        &self.secret
    }
}

/// Fixed-size digests keep the comparison independent of input length.
pub fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}
