//! PostgreSQL account repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use ident_core::domain::{Account, AccountSummary};
use ident_core::error::DomainError;
use ident_core::repositories::AccountRepository;

pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row types for sqlx mapping
#[derive(Debug, FromRow)]
struct AccountRow {
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: row.id,
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct AccountSummaryRow {
    id: Uuid,
    username: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl From<AccountSummaryRow> for AccountSummary {
    fn from(row: AccountSummaryRow) -> Self {
        AccountSummary {
            id: row.id,
            username: row.username,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

/// Map an insert-time error, promoting unique-constraint violations to the
/// conflict variants. The constraint name tells the two fields apart.
fn map_insert_error(e: sqlx::Error, account: &Account) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return match db.constraint() {
                Some(name) if name.contains("email") => {
                    DomainError::EmailAlreadyExists(account.email.clone())
                }
                _ => DomainError::UsernameAlreadyExists(account.username.clone()),
            };
        }
    }
    error!("Database error creating account: {}", e);
    DomainError::Database(e.to_string())
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<Account>, DomainError> {
        let row: Option<AccountRow> = sqlx::query_as(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM accounts
            WHERE username = $1 OR email = $1
            "#,
        )
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding account by identifier: {}", e);
            DomainError::Database(e.to_string())
        })?;

        Ok(row.map(Into::into))
    }

    async fn exists_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<bool, DomainError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM accounts WHERE username = $1 OR email = $2
            )
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error probing account existence: {}", e);
            DomainError::Database(e.to_string())
        })?;

        Ok(exists)
    }

    async fn insert(&self, account: &Account) -> Result<Account, DomainError> {
        let row: AccountRow = sqlx::query_as(
            r#"
            INSERT INTO accounts (id, username, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, email, password_hash, created_at
            "#,
        )
        .bind(account.id)
        .bind(&account.username)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, account))?;

        info!("Account created: {}", row.id);
        Ok(row.into())
    }

    async fn list_all(&self) -> Result<Vec<AccountSummary>, DomainError> {
        let rows: Vec<AccountSummaryRow> = sqlx::query_as(
            r#"
            SELECT id, username, email, created_at
            FROM accounts
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing accounts: {}", e);
            DomainError::Database(e.to_string())
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
