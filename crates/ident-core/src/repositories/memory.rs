//! In-memory account repository for tests and local development.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Account, AccountSummary};
use crate::error::DomainError;

use super::AccountRepository;

/// Mutex-guarded store. `insert` checks uniqueness and appends under one
/// lock, giving the same insert-if-absent guarantee a relational unique
/// constraint provides.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: Mutex<Vec<Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.lock().map_err(poisoned)?;
        Ok(accounts
            .iter()
            .find(|a| a.username == identifier || a.email == identifier)
            .cloned())
    }

    async fn exists_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<bool, DomainError> {
        let accounts = self.accounts.lock().map_err(poisoned)?;
        Ok(accounts
            .iter()
            .any(|a| a.username == username || a.email == email))
    }

    async fn insert(&self, account: &Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.lock().map_err(poisoned)?;
        if accounts.iter().any(|a| a.username == account.username) {
            return Err(DomainError::UsernameAlreadyExists(account.username.clone()));
        }
        if accounts.iter().any(|a| a.email == account.email) {
            return Err(DomainError::EmailAlreadyExists(account.email.clone()));
        }
        accounts.push(account.clone());
        Ok(account.clone())
    }

    async fn list_all(&self) -> Result<Vec<AccountSummary>, DomainError> {
        let accounts = self.accounts.lock().map_err(poisoned)?;
        Ok(accounts.iter().map(AccountSummary::from).collect())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> DomainError {
    DomainError::Database("account store lock poisoned".to_string())
}
