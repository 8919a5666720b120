//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account already exists")]
    AccountAlreadyExists,

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("Token generation error: {0}")]
    TokenIssue(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// True for any uniqueness conflict, whether caught by the pre-check
    /// or by the storage constraint.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            DomainError::AccountAlreadyExists
                | DomainError::UsernameAlreadyExists(_)
                | DomainError::EmailAlreadyExists(_)
        )
    }
}
