use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use async_trait::async_trait;
use encore_core::{HashingError, Password, SecretHasher};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

/// Fixed salt and digest for the decoy hash handed out by `dummy_hash`.
/// The digest is 32 zero bytes, which no password ever produced.
const DUMMY_SALT_B64: &str = "c29tZXNhbHRzb21lc2FsdA";
const DUMMY_DIGEST_B64: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Argon2id cost parameters. Tunable without invalidating existing hashes:
/// the parameters travel inside each PHC string, so verification always
/// uses the cost the hash was created with.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct HashingParams {
    pub m_cost: u32,
    pub t_cost: u32,
    pub p_cost: u32,
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            m_cost: 15000,
            t_cost: 2,
            p_cost: 1,
        }
    }
}

/// Salted, adaptive-cost password hashing on Argon2id.
///
/// Hashing and verification run under `spawn_blocking`; both are
/// CPU-expensive on purpose and must stay off the async executor threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2SecretHasher {
    params: HashingParams,
}

impl Argon2SecretHasher {
    pub fn new(params: HashingParams) -> Self {
        Self { params }
    }
}

#[async_trait]
impl SecretHasher for Argon2SecretHasher {
    async fn hash(&self, plaintext: &Password) -> Result<Secret<String>, HashingError> {
        compute_password_hash(plaintext.clone(), self.params).await
    }

    async fn verify(
        &self,
        plaintext: &Password,
        hash: &Secret<String>,
    ) -> Result<bool, HashingError> {
        verify_password_hash(plaintext.clone(), hash.clone(), self.params).await
    }

    /// A syntactically valid PHC string that never verifies. Login runs
    /// unknown-email attempts against it so both failure paths pay for a
    /// full hash computation. Verification takes its cost from the PHC
    /// string itself, so the decoy must embed the configured costs, not
    /// fixed ones.
    fn dummy_hash(&self) -> Secret<String> {
        Secret::from(format!(
            "$argon2id$v=19$m={},t={},p={}${DUMMY_SALT_B64}${DUMMY_DIGEST_B64}",
            self.params.m_cost, self.params.t_cost, self.params.p_cost,
        ))
    }
}

fn hasher(params: HashingParams) -> Result<Argon2<'static>, HashingError> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(params.m_cost, params.t_cost, params.p_cost, None)
            .map_err(|e| HashingError(e.to_string()))?,
    ))
}

#[tracing::instrument(name = "Computing password hash", skip_all)]
async fn compute_password_hash(
    password: Password,
    params: HashingParams,
) -> Result<Secret<String>, HashingError> {
    let current_span: tracing::Span = tracing::Span::current();

    tokio::task::spawn_blocking(move || {
        current_span.in_scope(move || {
            let salt: SaltString = SaltString::generate(rand_core::OsRng);
            hasher(params)?
                .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                .map(|h| Secret::from(h.to_string()))
                .map_err(|e| HashingError(e.to_string()))
        })
    })
    .await
    .map_err(|e| HashingError(e.to_string()))?
}

#[tracing::instrument(name = "Verify password hash", skip_all)]
async fn verify_password_hash(
    password_candidate: Password,
    expected_password_hash: Secret<String>,
    params: HashingParams,
) -> Result<bool, HashingError> {
    let current_span: tracing::Span = tracing::Span::current();

    tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            // An envelope we cannot even parse is a stored-data fault, not
            // a wrong password.
            let expected_password_hash: PasswordHash<'_> =
                PasswordHash::new(expected_password_hash.expose_secret())
                    .map_err(|e| HashingError(format!("unparseable password hash: {e}")))?;

            // Recomputes with the salt and cost embedded in the hash;
            // comparison inside the crate is constant-time.
            Ok(hasher(params)?
                .verify_password(
                    password_candidate.as_ref().expose_secret().as_bytes(),
                    &expected_password_hash,
                )
                .is_ok())
        })
    })
    .await
    .map_err(|e| HashingError(e.to_string()))?
}
