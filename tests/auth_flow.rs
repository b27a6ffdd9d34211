//! End-to-end flow over the real adapters: argon2 hashing (reduced cost),
//! JWT session tokens, random reset tokens, and the in-memory store.

use encore_auth::use_cases::{LoginError, RegisterError, ResetPasswordError, UpdatePasswordError};
use encore_auth::{
    Argon2SecretHasher, AuthenticatedSession, DeleteAccountUseCase, Email, ForgotPasswordUseCase,
    GetMeUseCase, HashingParams, IdentityStore, InMemoryIdentityStore, JwtConfig, JwtTokenSigner,
    LoginUseCase, MockEmailClient, Password, RandResetTokenIssuer, RegisterUseCase, ResetToken,
    ResetPasswordUseCase, Role, Secret, TokenSigner, UpdatePasswordUseCase,
    use_cases::GetMeError,
};

struct App {
    store: InMemoryIdentityStore,
    hasher: Argon2SecretHasher,
    signer: JwtTokenSigner,
    email_client: MockEmailClient,
}

impl App {
    fn new() -> Self {
        Self {
            store: InMemoryIdentityStore::new(),
            hasher: Argon2SecretHasher::new(HashingParams {
                m_cost: 64,
                t_cost: 1,
                p_cost: 1,
            }),
            signer: JwtTokenSigner::new(JwtConfig {
                jwt_secret: Secret::from("integration-test-secret".to_string()),
            }),
            email_client: MockEmailClient::new(),
        }
    }

    async fn register(&self, email: &str, pw: &str, name: &str, role: Role) -> Result<AuthenticatedSession, RegisterError> {
        RegisterUseCase::new(self.store.clone(), self.hasher, self.signer.clone())
            .execute(
                parse_email(email),
                parse_password(pw),
                name.to_string(),
                role,
            )
            .await
    }

    async fn login(&self, email: &str, pw: &str) -> Result<AuthenticatedSession, LoginError> {
        LoginUseCase::new(self.store.clone(), self.hasher, self.signer.clone())
            .execute(parse_email(email), parse_password(pw))
            .await
    }
}

fn parse_email(s: &str) -> Email {
    Email::try_from(Secret::from(s.to_string())).unwrap()
}

fn parse_password(s: &str) -> Password {
    Password::try_from(Secret::from(s.to_string())).unwrap()
}

#[tokio::test]
async fn test_full_account_lifecycle() {
    let app = App::new();

    // Register: session token carries the new identity.
    let session = app
        .register("m@x.com", "pw12345678", "Ana", Role::Musician)
        .await
        .unwrap();
    let id = session.identity.id;
    let claims = app.signer.verify(&session.token).unwrap();
    assert_eq!(claims.subject, id);
    assert_eq!(claims.role, Role::Musician);
    assert!(session.identity.last_login_at.is_none());

    // Duplicate registration loses to the unique constraint.
    let dup = app
        .register("M@x.com ", "pw12345678", "Imposter", Role::Client)
        .await;
    assert!(matches!(dup, Err(RegisterError::DuplicateEmail)));

    // Login sets lastLoginAt and issues a fresh verifiable token.
    let session = app.login("m@x.com", "pw12345678").await.unwrap();
    assert!(session.identity.last_login_at.is_some());
    assert_eq!(app.signer.verify(&session.token).unwrap().subject, id);

    // Both login failure branches produce the same payload.
    let unknown = app.login("ghost@x.com", "pw12345678").await.unwrap_err();
    let wrong = app.login("m@x.com", "wrong-password").await.unwrap_err();
    assert_eq!(unknown.to_string(), wrong.to_string());

    // getMe returns the caller-safe view.
    let view = GetMeUseCase::new(app.store.clone()).execute(id).await.unwrap();
    assert_eq!(view.email, "m@x.com");
    assert_eq!(view.name, "Ana");

    // Wrong current password leaves the hash usable.
    let update = UpdatePasswordUseCase::new(app.store.clone(), app.hasher);
    let denied = update
        .execute(id, parse_password("wrong-password"), parse_password("next-pw-123"))
        .await;
    assert!(matches!(denied, Err(UpdatePasswordError::IncorrectPassword)));
    app.login("m@x.com", "pw12345678").await.unwrap();

    // Accepted rotation invalidates the old password.
    update
        .execute(id, parse_password("pw12345678"), parse_password("rotated-pw-123"))
        .await
        .unwrap();
    assert!(matches!(
        app.login("m@x.com", "pw12345678").await,
        Err(LoginError::InvalidCredentials)
    ));
    app.login("m@x.com", "rotated-pw-123").await.unwrap();
}

#[tokio::test]
async fn test_forgot_and_reset_password_flow() {
    let app = App::new();
    let session = app
        .register("m@x.com", "pw12345678", "Ana", Role::Musician)
        .await
        .unwrap();
    let id = session.identity.id;

    let forgot = ForgotPasswordUseCase::new(
        app.store.clone(),
        RandResetTokenIssuer::new(),
        app.email_client.clone(),
    );

    // Unknown email: acknowledged, nothing sent, nothing stored.
    forgot.execute(parse_email("ghost@x.com")).await.unwrap();
    assert!(app.email_client.sent().await.is_empty());

    // Known email: the recorded delivery carries a 40-char hex token.
    forgot.execute(parse_email("m@x.com")).await.unwrap();
    let sent = app.email_client.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "m@x.com");
    assert_eq!(sent[0].token.len(), 40);

    let stored = app.store.find_by_id(&id).await.unwrap().unwrap();
    let reset = stored.pending_reset().unwrap();
    let remaining = reset.expires_at - chrono::Utc::now();
    assert!(remaining <= chrono::Duration::hours(1));
    assert!(remaining > chrono::Duration::minutes(59));

    // Reset with the delivered token; old password dies, new one works.
    let reset_uc = ResetPasswordUseCase::new(app.store.clone(), app.hasher);
    reset_uc
        .execute(
            ResetToken::new(sent[0].token.clone()),
            parse_password("newpw12345678"),
        )
        .await
        .unwrap();

    assert!(matches!(
        app.login("m@x.com", "pw12345678").await,
        Err(LoginError::InvalidCredentials)
    ));
    app.login("m@x.com", "newpw12345678").await.unwrap();

    let stored = app.store.find_by_id(&id).await.unwrap().unwrap();
    assert!(stored.pending_reset().is_none());

    // The token was consumed with the reset.
    let replay = reset_uc
        .execute(
            ResetToken::new(sent[0].token.clone()),
            parse_password("sneaky-pw-123"),
        )
        .await;
    assert!(matches!(replay, Err(ResetPasswordError::InvalidOrExpiredToken)));
}

#[tokio::test]
async fn test_delete_account_removes_only_the_identity_record() {
    let app = App::new();
    let session = app
        .register("m@x.com", "pw12345678", "Ana", Role::Client)
        .await
        .unwrap();
    let id = session.identity.id;

    DeleteAccountUseCase::new(app.store.clone())
        .execute(id)
        .await
        .unwrap();

    let me = GetMeUseCase::new(app.store.clone()).execute(id).await;
    assert!(matches!(me, Err(GetMeError::IdentityNotFound)));

    // The freed email is registrable again.
    app.register("m@x.com", "pw12345678", "Ana II", Role::Client)
        .await
        .unwrap();
}
