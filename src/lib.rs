//! # Encore Auth - Credential & Session Lifecycle Library
//!
//! This is a facade crate that re-exports the public APIs of the auth core's
//! component crates. It covers password hashing, session-token issuance and
//! verification, and the forgot/reset-password workflow for the Encore
//! marketplace. HTTP routing, storage engines, and email delivery are the
//! caller's collaborators, plugged in behind the port traits.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Identity`, `Role`, etc.
//! - **Port traits**: `IdentityStore`, `SecretHasher`, `TokenSigner`,
//!   `ResetTokenIssuer`, `ResetNotifier`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, `GetMeUseCase`,
//!   `UpdatePasswordUseCase`, `ForgotPasswordUseCase`,
//!   `ResetPasswordUseCase`, `DeleteAccountUseCase`
//! - **Adapters**: `Argon2SecretHasher`, `JwtTokenSigner`,
//!   `RandResetTokenIssuer`, `InMemoryIdentityStore`, `MockEmailClient`

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use encore_core::*;
}

// Re-export most commonly used core types at the root level
pub use encore_core::{
    Email, EmailError, Identity, IdentityId, IdentityPatch, IdentityView, NewIdentity, Password,
    PasswordError, PendingReset, ResetToken, Role,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use encore_core::{
        HashingError, IdentityStore, IdentityStoreError, NotifyError, ResetNotifier,
        ResetTokenIssuer, SecretHasher, SessionClaims, TokenError, TokenSigner,
    };
}

// Re-export port traits at root level
pub use encore_core::{
    HashingError, IdentityStore, IdentityStoreError, NotifyError, ResetNotifier, ResetTokenIssuer,
    SecretHasher, SessionClaims, TokenError, TokenSigner,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use encore_application::*;
}

// Re-export use cases at root level
pub use encore_application::{
    AuthenticatedSession, DeleteAccountUseCase, ForgotPasswordUseCase, GetMeUseCase, LoginUseCase,
    RegisterUseCase, ResetPasswordUseCase, UpdatePasswordUseCase,
};

// Uniform user-facing messages for the enumeration-sensitive paths
pub use encore_application::{INVALID_CREDENTIALS_MESSAGE, RESET_ACK_MESSAGE};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Password hashing
    pub mod hashing {
        pub use encore_adapters::hashing::*;
    }

    /// Token issuance
    pub mod tokens {
        pub use encore_adapters::tokens::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use encore_adapters::persistence::*;
    }

    /// Email client implementations
    pub mod email {
        pub use encore_adapters::email::*;
    }

    /// Configuration
    pub mod config {
        pub use encore_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use encore_adapters::{
    Argon2SecretHasher, AuthSettings, HashingParams, InMemoryIdentityStore, MockEmailClient,
    RandResetTokenIssuer,
};
pub use encore_adapters::tokens::{
    JwtConfig, JwtTokenSigner, RESET_TOKEN_TTL_SECONDS, SESSION_TTL_SECONDS,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
