//! Account repository trait (port)

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::{Account, AccountSummary};
use crate::error::DomainError;

/// Port over the credential store. The storage layer owns the uniqueness
/// guarantee; any caller-side pre-check is an optimization only.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Look up the account whose username or email equals `identifier`.
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<Account>, DomainError>;

    /// Fast-path uniqueness probe for registration.
    async fn exists_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<bool, DomainError>;

    /// Persist a new account. A uniqueness violation maps to
    /// `UsernameAlreadyExists` / `EmailAlreadyExists`, never to `Database`.
    async fn insert(&self, account: &Account) -> Result<Account, DomainError>;

    /// Administrative listing. The projection excludes secret material.
    async fn list_all(&self) -> Result<Vec<AccountSummary>, DomainError>;
}
