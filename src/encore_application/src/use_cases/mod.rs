use encore_core::IdentityView;

pub mod delete_account;
pub mod forgot_password;
pub mod get_me;
pub mod login;
pub mod register;
pub mod reset_password;
pub mod update_password;

/// The single user-visible message for a failed login. Unknown email and
/// wrong password share it so responses cannot reveal which one happened.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// The acknowledgment for a forgot-password request, identical whether or
/// not the email is registered. Exported so the caller's layer cannot
/// drift between the two branches.
pub const RESET_ACK_MESSAGE: &str =
    "If your email exists, you will receive a password reset link";

/// Outcome of a successful register or login: a session token plus the
/// caller-safe projection of the identity.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub token: String,
    pub identity: IdentityView,
}
