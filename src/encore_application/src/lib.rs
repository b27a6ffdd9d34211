pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

pub use use_cases::{
    AuthenticatedSession, INVALID_CREDENTIALS_MESSAGE, RESET_ACK_MESSAGE,
    delete_account::{DeleteAccountError, DeleteAccountUseCase},
    forgot_password::{ForgotPasswordError, ForgotPasswordUseCase},
    get_me::{GetMeError, GetMeUseCase},
    login::{LoginError, LoginUseCase},
    register::{RegisterError, RegisterUseCase},
    reset_password::{ResetPasswordError, ResetPasswordUseCase},
    update_password::{UpdatePasswordError, UpdatePasswordUseCase},
};
