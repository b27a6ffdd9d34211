use encore_core::{IdentityId, IdentityStore, IdentityStoreError, IdentityView};

/// Error types for the get-me use case
#[derive(Debug, thiserror::Error)]
pub enum GetMeError {
    #[error("User not found")]
    IdentityNotFound,
    #[error("Identity store error: {0}")]
    Store(IdentityStoreError),
}

impl From<IdentityStoreError> for GetMeError {
    fn from(err: IdentityStoreError) -> Self {
        match err {
            IdentityStoreError::IdentityNotFound => Self::IdentityNotFound,
            other => Self::Store(other),
        }
    }
}

/// Get-me use case - returns the caller-safe view of an identity
pub struct GetMeUseCase<S>
where
    S: IdentityStore,
{
    identity_store: S,
}

impl<S> GetMeUseCase<S>
where
    S: IdentityStore,
{
    pub fn new(identity_store: S) -> Self {
        Self { identity_store }
    }

    #[tracing::instrument(name = "GetMeUseCase::execute", skip(self))]
    pub async fn execute(&self, id: IdentityId) -> Result<IdentityView, GetMeError> {
        let identity = self
            .identity_store
            .find_by_id(&id)
            .await?
            .ok_or(GetMeError::IdentityNotFound)?;

        Ok(IdentityView::from(&identity))
    }
}
