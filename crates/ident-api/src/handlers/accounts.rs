//! Account administration handlers

use axum::extract::State;
use axum::Json;

use ident_core::domain::AccountSummary;
use ident_core::repositories::AccountRepository;

use crate::response::{domain_error_response, ApiResponse, ErrorResponse};
use crate::state::AppState;

/// GET /api/v1/accounts — administrative listing, no secret material.
pub async fn list<R: AccountRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<ApiResponse<Vec<AccountSummary>>>, ErrorResponse> {
    let accounts = state
        .accounts
        .list_accounts()
        .await
        .map_err(|e| domain_error_response(&e, state.config.app.is_development()))?;

    Ok(Json(ApiResponse::success(accounts)))
}
