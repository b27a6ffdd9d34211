pub mod config;
pub mod email;
pub mod hashing;
pub mod persistence;
pub mod tokens;

pub use config::AuthSettings;
pub use email::MockEmailClient;
pub use hashing::{Argon2SecretHasher, HashingParams};
pub use persistence::InMemoryIdentityStore;
pub use tokens::{
    JwtConfig, JwtTokenSigner, RESET_TOKEN_TTL_SECONDS, RandResetTokenIssuer, SESSION_TTL_SECONDS,
};
