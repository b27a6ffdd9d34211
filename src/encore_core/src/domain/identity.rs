use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{email::Email, reset_token::ResetToken, role::Role};

/// Opaque identity identifier, assigned by the store at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityId(Uuid);

impl IdentityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for IdentityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for IdentityId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// A pending password-reset request.
///
/// Holding token and expiry together makes the both-or-neither rule
/// unrepresentable to violate: an identity either has a complete pending
/// reset or none at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReset {
    pub token: ResetToken,
    pub expires_at: DateTime<Utc>,
}

impl PendingReset {
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

/// Creation payload handed to the store; id and timestamps are assigned
/// there.
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub email: Email,
    pub password_hash: Secret<String>,
    pub role: Role,
    pub name: String,
}

/// The stored record representing one account's authentication state.
///
/// Fields are private; all mutation goes through [`Identity::apply`], which
/// advances `updated_at` as a side effect.
#[derive(Debug, Clone)]
pub struct Identity {
    id: IdentityId,
    email: Email,
    password_hash: Secret<String>,
    role: Role,
    name: String,
    pending_reset: Option<PendingReset>,
    last_login_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    is_active: bool,
}

impl Identity {
    /// Materialize a new record from its creation payload. Called by store
    /// adapters, which own id assignment.
    pub fn create(id: IdentityId, new: NewIdentity, now: DateTime<Utc>) -> Self {
        Self {
            id,
            email: new.email,
            password_hash: new.password_hash,
            role: new.role,
            name: new.name,
            pending_reset: None,
            last_login_at: None,
            created_at: now,
            updated_at: now,
            is_active: true,
        }
    }

    pub fn id(&self) -> IdentityId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &Secret<String> {
        &self.password_hash
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pending_reset(&self) -> Option<&PendingReset> {
        self.pending_reset.as_ref()
    }

    pub fn last_login_at(&self) -> Option<DateTime<Utc>> {
        self.last_login_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Apply a partial update. Any applied patch advances `updated_at`,
    /// even when no field ends up changed.
    pub fn apply(&mut self, patch: IdentityPatch, now: DateTime<Utc>) {
        if let Some(hash) = patch.password_hash {
            self.password_hash = hash;
        }
        if let Some(at) = patch.last_login_at {
            self.last_login_at = Some(at);
        }
        if let Some(reset) = patch.pending_reset {
            self.pending_reset = reset;
        }
        self.updated_at = now;
    }
}

/// Builder-style partial update for an identity.
///
/// The pending-reset field is tri-state: untouched, replaced, or cleared.
#[derive(Debug, Clone, Default)]
pub struct IdentityPatch {
    password_hash: Option<Secret<String>>,
    last_login_at: Option<DateTime<Utc>>,
    pending_reset: Option<Option<PendingReset>>,
}

impl IdentityPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn password_hash(mut self, hash: Secret<String>) -> Self {
        self.password_hash = Some(hash);
        self
    }

    pub fn last_login_at(mut self, at: DateTime<Utc>) -> Self {
        self.last_login_at = Some(at);
        self
    }

    pub fn pending_reset(mut self, reset: PendingReset) -> Self {
        self.pending_reset = Some(Some(reset));
        self
    }

    pub fn clear_pending_reset(mut self) -> Self {
        self.pending_reset = Some(None);
        self
    }
}

/// Caller-facing projection of an identity.
///
/// Never carries the password hash or reset fields; constructing one is the
/// only way identity data leaves this core.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityView {
    pub id: IdentityId,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl From<&Identity> for IdentityView {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email.as_ref().expose_secret().clone(),
            name: identity.name.clone(),
            role: identity.role,
            last_login_at: identity.last_login_at,
            created_at: identity.created_at,
            is_active: identity.is_active,
        }
    }
}
