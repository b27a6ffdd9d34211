pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::{Email, EmailError},
    identity::{Identity, IdentityId, IdentityPatch, IdentityView, NewIdentity, PendingReset},
    password::{Password, PasswordError},
    reset_token::ResetToken,
    role::Role,
};

pub use ports::{
    repositories::{IdentityStore, IdentityStoreError},
    services::{
        HashingError, NotifyError, ResetNotifier, ResetTokenIssuer, SecretHasher, SessionClaims,
        TokenError, TokenSigner,
    },
};
