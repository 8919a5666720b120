//! Shared application state

use std::sync::Arc;

use ident_core::repositories::AccountRepository;
use ident_core::services::AccountService;
use ident_shared::config::AppConfig;

pub struct AppState<R: AccountRepository> {
    pub accounts: Arc<AccountService<R>>,
    pub config: AppConfig,
}

// Manual impl: `derive(Clone)` would demand `R: Clone`.
impl<R: AccountRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            accounts: Arc::clone(&self.accounts),
            config: self.config.clone(),
        }
    }
}
