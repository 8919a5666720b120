//! Account service: registration, login, and session verification.
//!
//! Orchestrates the credential store, password hasher, and token issuer.
//! All failure classification happens here; callers receive typed
//! `DomainError`s and translate them at the transport edge.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use ident_security::password::PasswordService;
use ident_security::token::TokenService;
use ident_shared::constants::{MAX_EMAIL_LENGTH, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH};
use ident_shared::utils::mask_email;

use crate::domain::{Account, AccountSummary};
use crate::error::DomainError;
use crate::repositories::AccountRepository;

/// Result of a successful registration or login.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResult {
    pub token: String,
    pub account: AccountSummary,
}

/// Identity decoded from a verified session token.
#[derive(Debug, Clone, Serialize)]
pub struct SessionPayload {
    pub account_id: Uuid,
    pub username: String,
    pub issued_at: i64,
}

/// Outcome of session verification. Never an error: an unusable token is
/// reported as `valid: false` and the caller decides how to react.
#[derive(Debug, Clone, Serialize)]
pub struct SessionVerification {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<SessionPayload>,
}

impl SessionVerification {
    fn valid(payload: SessionPayload) -> Self {
        Self {
            valid: true,
            payload: Some(payload),
        }
    }

    fn invalid() -> Self {
        Self {
            valid: false,
            payload: None,
        }
    }
}

/// Account service with explicitly injected collaborators.
pub struct AccountService<R: AccountRepository> {
    accounts: Arc<R>,
    hasher: PasswordService,
    tokens: TokenService,
}

impl<R: AccountRepository> AccountService<R> {
    pub fn new(accounts: Arc<R>, hasher: PasswordService, tokens: TokenService) -> Self {
        Self {
            accounts,
            hasher,
            tokens,
        }
    }

    /// Register a new account and issue its first session token.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResult, DomainError> {
        let username = username.trim();
        let email = email.trim();

        validate_registration(username, email, password)?;

        info!("Registration attempt for {}", mask_email(email));

        // Fast path only; the storage constraint is the real guard.
        if self
            .accounts
            .exists_by_username_or_email(username, email)
            .await?
        {
            warn!("Registration rejected: account already exists");
            return Err(DomainError::AccountAlreadyExists);
        }

        let password_hash = self
            .hasher
            .hash(password)
            .map_err(|e| DomainError::PasswordHash(e.to_string()))?;

        let account = Account::new(username, email, password_hash)
            .map_err(|e| DomainError::Validation(e.to_string()))?;

        let created = self.accounts.insert(&account).await?;

        let token = self
            .tokens
            .issue(&created.id, &created.username)
            .map_err(|e| DomainError::TokenIssue(e.to_string()))?;

        info!("Registration successful for account {}", created.id);

        Ok(AuthResult {
            token,
            account: created.summary(),
        })
    }

    /// Authenticate by username or email. Unknown identifiers and wrong
    /// passwords produce one indistinguishable failure.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<AuthResult, DomainError> {
        let account = self
            .accounts
            .find_by_identifier(identifier.trim())
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown identifier");
                DomainError::InvalidCredentials
            })?;

        if !self.hasher.verify(password, &account.password_hash) {
            warn!("Login failed: password mismatch for account {}", account.id);
            return Err(DomainError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(&account.id, &account.username)
            .map_err(|e| DomainError::TokenIssue(e.to_string()))?;

        info!("Login successful for account {}", account.id);

        Ok(AuthResult {
            token,
            account: account.summary(),
        })
    }

    /// Decode and check a presented session token. Returns the token's own
    /// payload as the established identity; the store is not consulted.
    pub fn verify_session(&self, token: &str) -> SessionVerification {
        match self.tokens.verify(token) {
            Ok(claims) => match claims.sub.parse::<Uuid>() {
                Ok(account_id) => SessionVerification::valid(SessionPayload {
                    account_id,
                    username: claims.username,
                    issued_at: claims.iat,
                }),
                Err(_) => {
                    warn!("Session token carried a malformed subject");
                    SessionVerification::invalid()
                }
            },
            Err(e) => {
                warn!("Session verification failed: {}", e);
                SessionVerification::invalid()
            }
        }
    }

    /// True when no account uses `username` as its username or email.
    pub async fn check_username_available(&self, username: &str) -> Result<bool, DomainError> {
        let username = username.trim();
        if username.is_empty() {
            return Ok(false);
        }
        Ok(self.accounts.find_by_identifier(username).await?.is_none())
    }

    /// Administrative listing; the projection carries no secret material.
    pub async fn list_accounts(&self) -> Result<Vec<AccountSummary>, DomainError> {
        self.accounts.list_all().await
    }
}

fn validate_registration(username: &str, email: &str, password: &str) -> Result<(), DomainError> {
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(DomainError::Validation(
            "username, email, and password are required".to_string(),
        ));
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(DomainError::Validation(format!(
            "username must be at most {MAX_USERNAME_LENGTH} characters"
        )));
    }
    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(DomainError::Validation(format!(
            "email must be at most {MAX_EMAIL_LENGTH} characters"
        )));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(DomainError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}
