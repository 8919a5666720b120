//! Authentication handlers: register, login, verify, check-username

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use ident_core::domain::AccountSummary;
use ident_core::repositories::AccountRepository;
use ident_core::services::SessionVerification;

use crate::response::{domain_error_response, ApiResponse, ErrorResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login accepts either the username or the email as `identifier`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

/// A missing token is treated like an invalid one, not a malformed request.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckUsernameQuery {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub account: AccountSummary,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub username: String,
    pub available: bool,
}

/// POST /api/v1/auth/register
pub async fn register<R: AccountRepository>(
    State(state): State<AppState<R>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponse>>), ErrorResponse> {
    let result = state
        .accounts
        .register(&payload.username, &payload.email, &payload.password)
        .await
        .map_err(|e| domain_error_response(&e, state.config.app.is_development()))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AuthResponse {
            token: result.token,
            account: result.account,
        })),
    ))
}

/// POST /api/v1/auth/login
pub async fn login<R: AccountRepository>(
    State(state): State<AppState<R>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ErrorResponse> {
    let result = state
        .accounts
        .login(&payload.identifier, &payload.password)
        .await
        .map_err(|e| domain_error_response(&e, state.config.app.is_development()))?;

    Ok(Json(ApiResponse::success(AuthResponse {
        token: result.token,
        account: result.account,
    })))
}

/// POST /api/v1/auth/verify — always 200; the body carries the verdict.
pub async fn verify<R: AccountRepository>(
    State(state): State<AppState<R>>,
    Json(payload): Json<VerifyRequest>,
) -> Json<ApiResponse<SessionVerification>> {
    let verification = state.accounts.verify_session(&payload.token);
    debug!("Session verification: valid={}", verification.valid);
    Json(ApiResponse::success(verification))
}

/// GET /api/v1/auth/check-username?username=
pub async fn check_username<R: AccountRepository>(
    State(state): State<AppState<R>>,
    Query(query): Query<CheckUsernameQuery>,
) -> Result<Json<ApiResponse<AvailabilityResponse>>, ErrorResponse> {
    let available = state
        .accounts
        .check_username_available(&query.username)
        .await
        .map_err(|e| domain_error_response(&e, state.config.app.is_development()))?;

    Ok(Json(ApiResponse::success(AvailabilityResponse {
        username: query.username,
        available,
    })))
}
