//! Account domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use ident_shared::types::new_id;

/// A registered identity with unique username and email.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct Account {
    pub id: Uuid,

    #[validate(length(min = 1, max = 50, message = "Username must be between 1 and 50 characters"))]
    pub username: String,

    #[validate(
        length(min = 1, max = 100, message = "Email must be between 1 and 100 characters"),
        email(message = "Invalid email address")
    )]
    pub email: String,

    /// Hashed secret. Never serialized back to any caller.
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Build a new account with a server-assigned id and creation time.
    /// Input is trimmed; field limits are enforced here as the last guard
    /// before persistence.
    pub fn new(
        username: &str,
        email: &str,
        password_hash: String,
    ) -> Result<Self, validator::ValidationErrors> {
        let account = Self {
            id: new_id(),
            username: username.trim().to_string(),
            email: email.trim().to_string(),
            password_hash,
            created_at: Utc::now(),
        };
        account.validate()?;
        Ok(account)
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary::from(self)
    }
}

/// Caller-facing projection of an account. Carries no secret material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            email: account.email.clone(),
            created_at: account.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_valid_account() {
        let account = Account::new("tony", "tony@stark.io", "hash".to_string()).unwrap();
        assert_eq!(account.username, "tony");
        assert_eq!(account.email, "tony@stark.io");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let account = Account::new(" tony ", " tony@stark.io ", "hash".to_string()).unwrap();
        assert_eq!(account.username, "tony");
        assert_eq!(account.email, "tony@stark.io");
    }

    #[test]
    fn rejects_empty_username() {
        assert!(Account::new("", "tony@stark.io", "hash".to_string()).is_err());
    }

    #[test]
    fn rejects_over_long_username() {
        let long = "a".repeat(51);
        assert!(Account::new(&long, "tony@stark.io", "hash".to_string()).is_err());
    }

    #[test]
    fn rejects_invalid_email() {
        assert!(Account::new("tony", "not-an-email", "hash".to_string()).is_err());
    }

    #[test]
    fn serialization_never_exposes_the_hash() {
        let account = Account::new("tony", "tony@stark.io", "hash".to_string()).unwrap();
        let json = serde_json::to_value(&account).unwrap();
        assert!(json.get("password_hash").is_none());

        let json = serde_json::to_value(account.summary()).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
