pub mod jwt_signer;
pub mod reset_issuer;

pub use jwt_signer::{JwtConfig, JwtTokenSigner, SESSION_TTL_SECONDS};
pub use reset_issuer::{RESET_TOKEN_TTL_SECONDS, RandResetTokenIssuer};
