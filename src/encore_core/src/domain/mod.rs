pub mod email;
pub mod identity;
pub mod password;
pub mod reset_token;
pub mod role;
