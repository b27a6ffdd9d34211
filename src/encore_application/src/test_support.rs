//! Shared mock port implementations for the use-case tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use encore_core::{
    Email, HashingError, Identity, IdentityId, IdentityPatch, IdentityStore, IdentityStoreError,
    NewIdentity, NotifyError, Password, ResetNotifier, ResetToken, ResetTokenIssuer, Role,
    SecretHasher, SessionClaims, TokenError, TokenSigner,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

pub(crate) fn email(s: &str) -> Email {
    Email::try_from(Secret::from(s.to_string())).unwrap()
}

pub(crate) fn password(s: &str) -> Password {
    Password::try_from(Secret::from(s.to_string())).unwrap()
}

#[derive(Clone, Default)]
pub(crate) struct MockIdentityStore {
    identities: Arc<RwLock<HashMap<IdentityId, Identity>>>,
}

impl MockIdentityStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert directly, bypassing uniqueness, for test setup.
    pub(crate) async fn seed(
        &self,
        email: Email,
        password_hash: &str,
        role: Role,
        name: &str,
    ) -> Identity {
        let identity = Identity::create(
            IdentityId::new(),
            NewIdentity {
                email,
                password_hash: Secret::from(password_hash.to_string()),
                role,
                name: name.to_string(),
            },
            Utc::now(),
        );
        self.identities
            .write()
            .await
            .insert(identity.id(), identity.clone());
        identity
    }

    pub(crate) async fn get(&self, id: &IdentityId) -> Option<Identity> {
        self.identities.read().await.get(id).cloned()
    }
}

#[async_trait]
impl IdentityStore for MockIdentityStore {
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

pub(crate) const MOCK_DUMMY_HASH: &str = "mock$\u{0}decoy";

/// Deterministic stand-in for the argon2 adapter: `hash(p)` is `mock$p`,
/// and every `verify` call is recorded so tests can assert the dummy-hash
/// burn on unknown emails.
#[derive(Clone, Default)]
pub(crate) struct MockSecretHasher {
    pub(crate) verified_against: Arc<RwLock<Vec<String>>>,
}

impl MockSecretHasher {
    pub(crate) fn hash_of(plaintext: &str) -> String {
        format!("mock${plaintext}")
    }
}

#[async_trait]
impl SecretHasher for MockSecretHasher {
    async fn hash(&self, plaintext: &Password) -> Result<Secret<String>, HashingError> {
        Ok(Secret::from(Self::hash_of(
            plaintext.as_ref().expose_secret(),
        )))
    }

    async fn verify(
        &self,
        plaintext: &Password,
        hash: &Secret<String>,
    ) -> Result<bool, HashingError> {
        self.verified_against
            .write()
            .await
            .push(hash.expose_secret().clone());
        Ok(hash.expose_secret() == &Self::hash_of(plaintext.as_ref().expose_secret()))
    }

    fn dummy_hash(&self) -> Secret<String> {
        Secret::from(MOCK_DUMMY_HASH.to_string())
    }
}

/// Token format `mock.<subject>.<role>`, transparent enough for tests to
/// assert the subject without real signing.
#[derive(Clone, Copy, Default)]
pub(crate) struct MockTokenSigner;

impl TokenSigner for MockTokenSigner {
    fn issue(&self, subject: &IdentityId, role: Role) -> Result<String, TokenError> {
        Ok(format!("mock.{subject}.{role}"))
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let mut parts = token.splitn(3, '.');
        let (Some("mock"), Some(subject), Some(role)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(TokenError::Malformed);
        };
        let now = Utc::now();
        Ok(SessionClaims {
            subject: subject.parse().map_err(|_| TokenError::Malformed)?,
            role: role.parse().map_err(|_| TokenError::Malformed)?,
            issued_at: now,
            expires_at: now + Duration::days(7),
        })
    }
}

#[derive(Clone)]
pub(crate) struct MockResetTokenIssuer {
    pub(crate) token: String,
}

impl ResetTokenIssuer for MockResetTokenIssuer {
    fn issue(&self) -> (ResetToken, DateTime<Utc>) {
        (
            ResetToken::new(self.token.clone()),
            Utc::now() + Duration::hours(1),
        )
    }
}

#[derive(Clone, Default)]
pub(crate) struct MockResetNotifier {
    pub(crate) sent: Arc<RwLock<Vec<(String, String)>>>,
    pub(crate) fail: bool,
}

#[async_trait]
impl ResetNotifier for MockResetNotifier {
    async fn send_reset_token(
        &self,
        recipient: &Email,
        token: &ResetToken,
    ) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError("mock delivery failure".to_string()));
        }
        self.sent.write().await.push((
            recipient.as_ref().expose_secret().clone(),
            token.as_ref().expose_secret().clone(),
        ));
        Ok(())
    }
}
