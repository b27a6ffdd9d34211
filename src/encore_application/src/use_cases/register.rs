use encore_core::{
    Email, HashingError, IdentityStore, IdentityStoreError, IdentityView, NewIdentity, Password,
    Role, SecretHasher, TokenError, TokenSigner,
};

use crate::use_cases::AuthenticatedSession;

/// Error types for the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("User already exists with this email")]
    DuplicateEmail,
    #[error("Name must not be empty")]
    EmptyName,
    #[error(transparent)]
    Hashing(#[from] HashingError),
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error("Identity store error: {0}")]
    Store(IdentityStoreError),
}

// The store's conflict signal is the sole source of DuplicateEmail; mapping
// it here keeps the use case free of existence probes.
impl From<IdentityStoreError> for RegisterError {
    fn from(err: IdentityStoreError) -> Self {
        match err {
            IdentityStoreError::EmailTaken => Self::DuplicateEmail,
            other => Self::Store(other),
        }
    }
}

/// Register use case - creates an identity and opens its first session
pub struct RegisterUseCase<S, H, T>
where
    S: IdentityStore,
    H: SecretHasher,
    T: TokenSigner,
{
    identity_store: S,
    hasher: H,
    signer: T,
}

impl<S, H, T> RegisterUseCase<S, H, T>
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

    /// Execute the register use case
    ///
    /// Hashes the password, then relies on the store's atomic
    /// unique-constrained insert to reject duplicates. There is no prior
    /// existence check: two concurrent registrations for the same email
    /// race inside the store, and exactly one wins.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
        name: String,
        role: Role,
    ) -> Result<AuthenticatedSession, RegisterError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(RegisterError::EmptyName);
        }

        let password_hash = self.hasher.hash(&password).await?;

        let identity = self
            .identity_store
            .create_unique(NewIdentity {
                email,
                password_hash,
                role,
                name,
            })
            .await?;

        let token = self.signer.issue(&identity.id(), identity.role())?;

        Ok(AuthenticatedSession {
            token,
            identity: IdentityView::from(&identity),
        })
    }
}
