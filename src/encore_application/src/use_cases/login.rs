use chrono::Utc;
use encore_core::{
    Email, HashingError, IdentityPatch, IdentityStore, IdentityStoreError, IdentityView, Password,
    SecretHasher, TokenError, TokenSigner,
};

use crate::use_cases::{AuthenticatedSession, INVALID_CREDENTIALS_MESSAGE};

/// Error types for the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// One variant for both unknown email and wrong password. Collapsing
    /// them at the type level is what keeps responses enumeration-proof.
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,
    #[error(transparent)]
    Hashing(#[from] HashingError),
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error("Identity store error: {0}")]
    Store(#[from] IdentityStoreError),
}

/// Login use case - verifies credentials and opens a session
pub struct LoginUseCase<S, H, T>
where
    S: IdentityStore,
    H: SecretHasher,
    T: TokenSigner,
{
    identity_store: S,
    hasher: H,
    signer: T,
}

impl<S, H, T> LoginUseCase<S, H, T>
where
    S: IdentityStore,
    H: SecretHasher,
    T: TokenSigner,
{
    pub fn new(identity_store: S, hasher: H, signer: T) -> Self {
        Self {
            identity_store,
            hasher,
            signer,
        }
    }

    /// Execute the login use case
    ///
    /// When the email is unknown, a verification is still performed against
    /// the hasher's fixed dummy hash before failing, so the latency of
    /// "unknown email" and "known email, wrong password" stays
    /// statistically indistinguishable.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
    ) -> Result<AuthenticatedSession, LoginError> {
        let Some(identity) = self.identity_store.find_by_email(&email).await? else {
            // Burn a verification; the outcome is irrelevant by design.
            let _ = self.hasher.verify(&password, &self.hasher.dummy_hash()).await;
            return Err(LoginError::InvalidCredentials);
        };

        if !self
            .hasher
            .verify(&password, identity.password_hash())
            .await?
        {
            return Err(LoginError::InvalidCredentials);
        }

        let identity = self
            .identity_store
            .update(
                &identity.id(),
                IdentityPatch::new().last_login_at(Utc::now()),
            )
            .await?;

        let token = self.signer.issue(&identity.id(), identity.role())?;

        Ok(AuthenticatedSession {
            token,
            identity: IdentityView::from(&identity),
        })
    }
}
