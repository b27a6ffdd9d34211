use chrono::{DateTime, Utc};
use encore_core::{IdentityId, Role, SessionClaims, TokenError, TokenSigner};
use jsonwebtoken::{
    DecodingKey, EncodingKey, Validation, decode, encode, errors::ErrorKind,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// Fixed session lifetime of seven days.
pub const SESSION_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Process-wide signing configuration, loaded once at startup. The secret
/// never leaves this struct unredacted.
#[derive(Clone)]
pub struct JwtConfig {
    pub jwt_secret: Secret<String>,
}

impl JwtConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

/// Stateless session tokens on HS256.
///
/// No server-side session table and no revocation before natural expiry;
/// a leaked token stays valid until its `exp`. The short fixed lifetime is
/// the accepted bound on that blast radius.
#[derive(Clone)]
pub struct JwtTokenSigner {
    config: JwtConfig,
}

impl JwtTokenSigner {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    role: Role,
    iat: i64,
    exp: i64,
}

impl TokenSigner for JwtTokenSigner {
    fn issue(&self, subject: &IdentityId, role: Role) -> Result<String, TokenError> {
        let issued_at = Utc::now();
        let expires_at = issued_at + chrono::Duration::seconds(SESSION_TTL_SECONDS);

        let claims = Claims {
            sub: subject.to_string(),
            role,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.as_bytes()),
        )
        .map_err(|e| TokenError::Signing(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        // Expiry is strict: a token is dead the second `exp` passes.
        let mut validation = Validation::default();
        validation.leeway = 0;

        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed,
        })?;

        let subject: IdentityId = claims.sub.parse().map_err(|_| TokenError::Malformed)?;
        let issued_at = timestamp(claims.iat)?;
        let expires_at = timestamp(claims.exp)?;

        Ok(SessionClaims {
            subject,
            role: claims.role,
            issued_at,
            expires_at,
        })
    }
}

fn timestamp(secs: i64) -> Result<DateTime<Utc>, TokenError> {
    DateTime::from_timestamp(secs, 0).ok_or(TokenError::Malformed)
}
