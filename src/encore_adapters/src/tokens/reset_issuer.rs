use chrono::{DateTime, Utc};
use encore_core::{ResetToken, ResetTokenIssuer};
use rand::RngCore;

/// Fixed reset window of one hour.
pub const RESET_TOKEN_TTL_SECONDS: i64 = 60 * 60;

// 20 bytes = 160 bits of entropy, hex-encoded to 40 characters.
const RESET_TOKEN_BYTES: usize = 20;

/// Reset tokens from the OS-seeded CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandResetTokenIssuer;

impl RandResetTokenIssuer {
    pub fn new() -> Self {
        Self
    }
}

impl ResetTokenIssuer for RandResetTokenIssuer {
    fn issue(&self) -> (ResetToken, DateTime<Utc>) {
        let mut bytes = [0u8; RESET_TOKEN_BYTES];
        rand::rng().fill_bytes(&mut bytes);

        let token: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        let expires_at = Utc::now() + chrono::Duration::seconds(RESET_TOKEN_TTL_SECONDS);

        (ResetToken::new(token), expires_at)
    }
}
