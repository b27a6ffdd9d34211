use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use encore_core::{
    Email, Identity, IdentityId, IdentityPatch, IdentityStore, IdentityStoreError, NewIdentity,
    ResetToken,
};
use tokio::sync::RwLock;

/// Reference `IdentityStore` over a shared hash map.
///
/// The uniqueness check and the insert happen under one write guard, which
/// is this adapter's version of the atomic unique-constrained insert a
/// database store provides; concurrent registrations for the same email
/// cannot interleave between check and insert.
#[derive(Default, Clone)]
pub struct InMemoryIdentityStore {
    identities: Arc<RwLock<HashMap<IdentityId, Identity>>>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityStore for InMemoryIdentityStore {
    async fn create_unique(&self, new: NewIdentity) -> Result<Identity, IdentityStoreError> {
        let mut identities = self.identities.write().await;
        if identities.values().any(|i| i.email() == &new.email) {
            return Err(IdentityStoreError::EmailTaken);
        }
        let identity = Identity::create(IdentityId::new(), new, Utc::now());
        identities.insert(identity.id(), identity.clone());
        Ok(identity)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Identity>, IdentityStoreError> {
        let identities = self.identities.read().await;
        Ok(identities.values().find(|i| i.email() == email).cloned())
    }

    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<Identity>, IdentityStoreError> {
        Ok(self.identities.read().await.get(id).cloned())
    }

    async fn find_by_valid_reset_token(
        &self,
        token: &ResetToken,
        now: DateTime<Utc>,
    ) -> Result<Option<Identity>, IdentityStoreError> {
        // Expiry is filtered here, lazily; stale reset fields stay on the
        // record until the next write.
        let identities = self.identities.read().await;
        Ok(identities
            .values()
            .find(|i| {
                i.pending_reset()
                    .is_some_and(|r| &r.token == token && r.is_valid_at(now))
            })
            .cloned())
    }

    async fn update(
        &self,
        id: &IdentityId,
        patch: IdentityPatch,
    ) -> Result<Identity, IdentityStoreError> {
        let mut identities = self.identities.write().await;
        let identity = identities
            .get_mut(id)
            .ok_or(IdentityStoreError::IdentityNotFound)?;
        identity.apply(patch, Utc::now());
        Ok(identity.clone())
    }

    async fn delete_by_id(&self, id: &IdentityId) -> Result<bool, IdentityStoreError> {
        Ok(self.identities.write().await.remove(id).is_some())
    }
}
