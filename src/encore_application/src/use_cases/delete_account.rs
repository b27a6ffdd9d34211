use encore_core::{IdentityId, IdentityStore, IdentityStoreError};

/// Error types for the delete-account use case
#[derive(Debug, thiserror::Error)]
pub enum DeleteAccountError {
    #[error("User not found")]
    IdentityNotFound,
    #[error("Identity store error: {0}")]
    Store(#[from] IdentityStoreError),
}

/// Delete-account use case - removes the identity record
///
/// Only the identity record is deleted here. Cascading removal of
/// dependent records (profiles, bookings, reviews) is the caller's
/// responsibility.
pub struct DeleteAccountUseCase<S>
where
    S: IdentityStore,
{
    identity_store: S,
}

impl<S> DeleteAccountUseCase<S>
where
    S: IdentityStore,
{
    pub fn new(identity_store: S) -> Self {
        Self { identity_store }
    }

    #[tracing::instrument(name = "DeleteAccountUseCase::execute", skip(self))]
    pub async fn execute(&self, id: IdentityId) -> Result<(), DeleteAccountError> {
        if !self.identity_store.delete_by_id(&id).await? {
            return Err(DeleteAccountError::IdentityNotFound);
        }

        Ok(())
    }
}
