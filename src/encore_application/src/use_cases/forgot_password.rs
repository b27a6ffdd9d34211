use encore_core::{
    Email, IdentityPatch, IdentityStore, IdentityStoreError, PendingReset, ResetNotifier,
    ResetTokenIssuer,
};

/// Error types for the forgot-password use case
#[derive(Debug, thiserror::Error)]
pub enum ForgotPasswordError {
    #[error("Identity store error: {0}")]
    Store(#[from] IdentityStoreError),
}

/// Forgot-password use case - opens the reset window for a known email
///
/// Returns `Ok(())` for unknown emails as well, with no store mutation;
/// callers answer both branches with [`RESET_ACK_MESSAGE`], so nothing in
/// the response reveals whether the account exists.
///
/// [`RESET_ACK_MESSAGE`]: crate::use_cases::RESET_ACK_MESSAGE
pub struct ForgotPasswordUseCase<S, R, N>
where
    S: IdentityStore,
    R: ResetTokenIssuer,
    N: ResetNotifier,
{
    identity_store: S,
    reset_issuer: R,
    notifier: N,
}

impl<S, R, N> ForgotPasswordUseCase<S, R, N>
where
    S: IdentityStore,
    R: ResetTokenIssuer,
    N: ResetNotifier,
{
    pub fn new(identity_store: S, reset_issuer: R, notifier: N) -> Self {
        Self {
            identity_store,
            reset_issuer,
            notifier,
        }
    }

    #[tracing::instrument(name = "ForgotPasswordUseCase::execute", skip(self))]
    pub async fn execute(&self, email: Email) -> Result<(), ForgotPasswordError> {
        let Some(identity) = self.identity_store.find_by_email(&email).await? else {
            return Ok(());
        };

        let (token, expires_at) = self.reset_issuer.issue();

        self.identity_store
            .update(
                &identity.id(),
                IdentityPatch::new().pending_reset(PendingReset {
                    token: token.clone(),
                    expires_at,
                }),
            )
            .await?;

        // Delivery is best-effort once the reset state is persisted; the
        // user can always request another token.
        if let Err(err) = self.notifier.send_reset_token(identity.email(), &token).await {
            tracing::warn!(error = %err, "failed to deliver password reset notification");
        }

        Ok(())
    }
}
