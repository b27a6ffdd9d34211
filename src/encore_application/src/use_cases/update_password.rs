use encore_core::{
    HashingError, IdentityId, IdentityPatch, IdentityStore, IdentityStoreError, Password,
    SecretHasher,
};

/// Error types for the update-password use case
#[derive(Debug, thiserror::Error)]
pub enum UpdatePasswordError {
    #[error("User not found")]
    IdentityNotFound,
    #[error("Current password is incorrect")]
    IncorrectPassword,
    #[error(transparent)]
    Hashing(#[from] HashingError),
    #[error("Identity store error: {0}")]
    Store(IdentityStoreError),
}

impl From<IdentityStoreError> for UpdatePasswordError {
    fn from(err: IdentityStoreError) -> Self {
        match err {
            IdentityStoreError::IdentityNotFound => Self::IdentityNotFound,
            other => Self::Store(other),
        }
    }
}

/// Update-password use case - rotates the hash after re-proving the
/// current password
pub struct UpdatePasswordUseCase<S, H>
where
    S: IdentityStore,
    H: SecretHasher,
{
    identity_store: S,
    hasher: H,
}

impl<S, H> UpdatePasswordUseCase<S, H>
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

    #[tracing::instrument(
        name = "UpdatePasswordUseCase::execute",
        skip(self, current_password, new_password)
    )]
    pub async fn execute(
        &self,
        id: IdentityId,
        current_password: Password,
        new_password: Password,
    ) -> Result<(), UpdatePasswordError> {
        let identity = self
            .identity_store
            .find_by_id(&id)
            .await?
            .ok_or(UpdatePasswordError::IdentityNotFound)?;

        if !self
            .hasher
            .verify(&current_password, identity.password_hash())
            .await?
        {
            return Err(UpdatePasswordError::IncorrectPassword);
        }

        let password_hash = self.hasher.hash(&new_password).await?;

        self.identity_store
            .update(&id, IdentityPatch::new().password_hash(password_hash))
            .await?;

        Ok(())
    }
}
