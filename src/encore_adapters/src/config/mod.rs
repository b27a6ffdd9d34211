use secrecy::Secret;
use serde::Deserialize;

use crate::hashing::HashingParams;
use crate::tokens::JwtConfig;

pub mod env {
    pub const ENV_PREFIX: &str = "ENCORE_AUTH";
    pub const JWT_SECRET_ENV_VAR: &str = "ENCORE_AUTH_JWT_SECRET";
    pub const ARGON2_M_COST_ENV_VAR: &str = "ENCORE_AUTH_ARGON2__M_COST";
    pub const ARGON2_T_COST_ENV_VAR: &str = "ENCORE_AUTH_ARGON2__T_COST";
    pub const ARGON2_P_COST_ENV_VAR: &str = "ENCORE_AUTH_ARGON2__P_COST";
}

/// Process-wide settings, loaded once at startup from the environment
/// (optionally via a `.env` file). The JWT secret is required and lives
/// for the process's lifetime; Argon2 costs default to production values.
#[derive(Debug, Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: Secret<String>,
    #[serde(default)]
    pub argon2: HashingParams,
}

impl AuthSettings {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        config::Config::builder()
            .add_source(config::Environment::with_prefix(env::ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            jwt_secret: self.jwt_secret.clone(),
        }
    }
}
