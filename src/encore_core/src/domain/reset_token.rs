use secrecy::{ExposeSecret, Secret};

/// An opaque password-reset token.
///
/// The value proves control of the account's email for the duration of the
/// reset window; it is single-use by workflow (cleared in the same mutation
/// that sets the new password hash), not by any property of the value.
#[derive(Debug, Clone)]
pub struct ResetToken(Secret<String>);

impl ResetToken {
    pub fn new(value: String) -> Self {
        Self(Secret::from(value))
    }
}

impl AsRef<Secret<String>> for ResetToken {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for ResetToken {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for ResetToken {}
