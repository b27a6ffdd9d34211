use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::Secret;
use thiserror::Error;

use crate::domain::{
    email::Email, identity::IdentityId, password::Password, reset_token::ResetToken, role::Role,
};

// SecretHasher port trait and errors
#[derive(Debug, Error)]
#[error("Password hashing failure: {0}")]
pub struct HashingError(pub String);

/// One-way, salted, adaptive-cost password hashing.
///
/// Hashing is CPU-expensive on purpose; implementations must not run it on
/// a latency-sensitive executor thread.
#[async_trait]
pub trait SecretHasher: Send + Sync {
    /// Hash with a freshly generated salt; two calls with the same input
    /// produce different outputs.
    async fn hash(&self, plaintext: &Password) -> Result<Secret<String>, HashingError>;

    /// Recompute using the salt embedded in `hash` and compare in constant
    /// time. Any mismatch is `Ok(false)`; only a hash whose envelope cannot
    /// be parsed at all is an error.
    async fn verify(
        &self,
        plaintext: &Password,
        hash: &Secret<String>,
    ) -> Result<bool, HashingError>;

    /// A fixed, well-formed hash that no real password produced. Login
    /// verifies against it when the email is unknown, so the unknown-email
    /// and wrong-password paths cost the same.
    fn dummy_hash(&self) -> Secret<String>;
}

// TokenSigner port trait and errors
#[derive(Debug, Error, PartialEq)]
pub enum TokenError {
    #[error("Token signature does not match")]
    InvalidSignature,
    #[error("Token has expired")]
    Expired,
    #[error("Token is malformed")]
    Malformed,
    #[error("Token signing failed: {0}")]
    Signing(String),
}

/// Claims carried by a verified session token.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionClaims {
    pub subject: IdentityId,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Issues and verifies signed, time-bounded session tokens.
///
/// Tokens are stateless: there is no revocation before natural expiry, by
/// design. Implementations hold the signing secret for the process
/// lifetime and never log it.
pub trait TokenSigner: Send + Sync {
    fn issue(&self, subject: &IdentityId, role: Role) -> Result<String, TokenError>;

    fn verify(&self, token: &str) -> Result<SessionClaims, TokenError>;
}

// ResetTokenIssuer port trait
/// Produces high-entropy, time-bounded password-reset tokens.
pub trait ResetTokenIssuer: Send + Sync {
    fn issue(&self) -> (ResetToken, DateTime<Utc>);
}

// ResetNotifier port trait and errors
#[derive(Debug, Error)]
#[error("Notification delivery failed: {0}")]
pub struct NotifyError(pub String);

/// Hands an issued reset token to an external delivery channel.
///
/// Delivery failure never rolls back the persisted reset state; the caller
/// may simply request another token.
#[async_trait]
pub trait ResetNotifier: Send + Sync {
    async fn send_reset_token(
        &self,
        recipient: &Email,
        token: &ResetToken,
    ) -> Result<(), NotifyError>;
}
