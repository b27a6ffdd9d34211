use chrono::Utc;
use encore_core::{
    HashingError, IdentityPatch, IdentityStore, IdentityStoreError, Password, ResetToken,
    SecretHasher,
};

/// Error types for the reset-password use case
#[derive(Debug, thiserror::Error)]
pub enum ResetPasswordError {
    /// One variant for "no such token" and "token expired"; distinguishing
    /// them would leak whether a guessed token was ever real.
    #[error("Invalid or expired password reset token")]
    InvalidOrExpiredToken,
    #[error(transparent)]
    Hashing(#[from] HashingError),
    #[error("Identity store error: {0}")]
    Store(#[from] IdentityStoreError),
}

/// Reset-password use case - consumes a pending reset token
pub struct ResetPasswordUseCase<S, H>
where
    S: IdentityStore,
    H: SecretHasher,
{
    identity_store: S,
    hasher: H,
}

impl<S, H> ResetPasswordUseCase<S, H>
where
    S: IdentityStore,
    H: SecretHasher,
{
    pub fn new(identity_store: S, hasher: H) -> Self {
        Self {
            identity_store,
            hasher,
        }
    }

    /// Execute the reset-password use case
    ///
    /// The new hash lands in the same mutation that clears the reset
    /// fields, which is what makes the token single-use.
    #[tracing::instrument(name = "ResetPasswordUseCase::execute", skip(self, token, new_password))]
    pub async fn execute(
        &self,
        token: ResetToken,
        new_password: Password,
    ) -> Result<(), ResetPasswordError> {
        let identity = self
            .identity_store
            .find_by_valid_reset_token(&token, Utc::now())
            .await?
            .ok_or(ResetPasswordError::InvalidOrExpiredToken)?;

        let password_hash = self.hasher.hash(&new_password).await?;

        self.identity_store
            .update(
                &identity.id(),
                IdentityPatch::new()
                    .password_hash(password_hash)
                    .clear_pending_reset(),
            )
            .await?;

        Ok(())
    }
}
