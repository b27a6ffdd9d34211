use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{
    email::Email,
    identity::{Identity, IdentityId, IdentityPatch, NewIdentity},
    reset_token::ResetToken,
};

// IdentityStore port trait and errors
#[derive(Debug, Error)]
pub enum IdentityStoreError {
    #[error("Email already registered")]
    EmailTaken,
    #[error("Identity not found")]
    IdentityNotFound,
    #[error("Identity store unavailable: {0}")]
    Unavailable(String),
}

impl PartialEq for IdentityStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EmailTaken, Self::EmailTaken) => true,
            (Self::IdentityNotFound, Self::IdentityNotFound) => true,
            (Self::Unavailable(_), Self::Unavailable(_)) => true,
            _ => false,
        }
    }
}

/// Durable storage for identity records.
///
/// The store, not its callers, owns uniqueness: `create_unique` must reject
/// a duplicate normalized email atomically with the insert, so two
/// concurrent registrations for the same address cannot both succeed.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn create_unique(&self, new: NewIdentity) -> Result<Identity, IdentityStoreError>;

    async fn find_by_email(&self, email: &Email) -> Result<Option<Identity>, IdentityStoreError>;

    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<Identity>, IdentityStoreError>;

    /// Look up the identity holding `token` with an expiry strictly after
    /// `now`. An expired token is indistinguishable from an absent one.
    async fn find_by_valid_reset_token(
        &self,
        token: &ResetToken,
        now: DateTime<Utc>,
    ) -> Result<Option<Identity>, IdentityStoreError>;

    async fn update(
        &self,
        id: &IdentityId,
        patch: IdentityPatch,
    ) -> Result<Identity, IdentityStoreError>;

    /// Delete the record, returning whether it existed. Dependent records
    /// (profiles, bookings, reviews) are the caller's cascade to run.
    async fn delete_by_id(&self, id: &IdentityId) -> Result<bool, IdentityStoreError>;
}
