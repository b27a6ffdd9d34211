use std::sync::Arc;

use encore_core::{Email, NotifyError, ResetNotifier, ResetToken};
use secrecy::ExposeSecret;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq)]
pub struct SentReset {
    pub recipient: String,
    pub token: String,
}

/// Recording stand-in for a real email delivery channel. Tests inspect
/// `sent()` to assert which branch of the forgot-password flow ran.
#[derive(Debug, Clone, Default)]
pub struct MockEmailClient {
    sent: Arc<RwLock<Vec<SentReset>>>,
}

impl MockEmailClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent(&self) -> Vec<SentReset> {
        self.sent.read().await.clone()
    }
}

#[async_trait::async_trait]
impl ResetNotifier for MockEmailClient {
    async fn send_reset_token(
        &self,
        recipient: &Email,
        token: &ResetToken,
    ) -> Result<(), NotifyError> {
        self.sent.write().await.push(SentReset {
            recipient: recipient.as_ref().expose_secret().clone(),
            token: token.as_ref().expose_secret().clone(),
        });
        Ok(())
    }
}
