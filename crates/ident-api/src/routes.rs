//! Router assembly

use axum::routing::{get, post};
use axum::Router;

use ident_core::repositories::AccountRepository;

use crate::handlers::{accounts, auth, health};
use crate::state::AppState;

pub fn router<R: AccountRepository + 'static>(state: AppState<R>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/verify", post(auth::verify))
        .route("/api/v1/auth/check-username", get(auth::check_username))
        .route("/api/v1/accounts", get(accounts::list))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use ident_core::repositories::InMemoryAccountRepository;
    use ident_core::services::AccountService;
    use ident_security::password::PasswordService;
    use ident_security::token::TokenService;
    use ident_shared::config::{AppConfig, AppSettings, AuthSettings, DatabaseSettings};

    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            app: AppSettings {
                env: "test".to_string(),
                host: "127.0.0.1".to_string(),
                port: 0,
                name: "ident-server".to_string(),
            },
            database: DatabaseSettings {
                url: "postgres://unused".to_string(),
                max_connections: 1,
                min_connections: 1,
            },
            auth: AuthSettings {
                token_secret: "router-test-secret".to_string(),
                token_expiry_days: 30,
                hash_cost: 4,
            },
        }
    }

    fn test_router() -> Router {
        let config = test_config();
        let service = AccountService::new(
            Arc::new(InMemoryAccountRepository::new()),
            PasswordService::new(config.auth.hash_cost),
            TokenService::new(&config.auth.token_secret, config.auth.token_expiry_days),
        );
        router(AppState {
            accounts: Arc::new(service),
            config,
        })
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = match body {
            Some(v) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(v.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn register_body(username: &str, email: &str, password: &str) -> Value {
        json!({ "username": username, "email": email, "password": password })
    }

    #[tokio::test]
    async fn register_login_verify_flow() {
        let app = test_router();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/auth/register",
            Some(register_body("tony", "tony@stark.io", "ironman1")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let token = body["data"]["token"].as_str().unwrap().to_string();
        assert!(!token.is_empty());
        assert_eq!(body["data"]["account"]["username"], "tony");
        assert!(body["data"]["account"].get("password_hash").is_none());

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/auth/login",
            Some(json!({ "identifier": "tony@stark.io", "password": "ironman1" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["account"]["username"], "tony");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/auth/verify",
            Some(json!({ "token": token })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["valid"], true);
        assert_eq!(body["data"]["payload"]["username"], "tony");
    }

    #[tokio::test]
    async fn duplicate_registration_is_a_conflict() {
        let app = test_router();

        send(
            &app,
            Method::POST,
            "/api/v1/auth/register",
            Some(register_body("tony", "tony@stark.io", "ironman1")),
        )
        .await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/auth/register",
            Some(register_body("tony", "other@x.io", "whatever1")),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn short_password_is_a_validation_error() {
        let app = test_router();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/auth/register",
            Some(register_body("tony", "tony@stark.io", "short")),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn login_failures_share_one_shape() {
        let app = test_router();

        send(
            &app,
            Method::POST,
            "/api/v1/auth/register",
            Some(register_body("tony", "tony@stark.io", "ironman1")),
        )
        .await;

        let (status_wrong, body_wrong) = send(
            &app,
            Method::POST,
            "/api/v1/auth/login",
            Some(json!({ "identifier": "tony", "password": "wrong-password" })),
        )
        .await;
        let (status_unknown, body_unknown) = send(
            &app,
            Method::POST,
            "/api/v1/auth/login",
            Some(json!({ "identifier": "nobody", "password": "wrong-password" })),
        )
        .await;

        assert_eq!(status_wrong, StatusCode::UNAUTHORIZED);
        assert_eq!(status_unknown, StatusCode::UNAUTHORIZED);
        assert_eq!(body_wrong["error"], body_unknown["error"]);
    }

    #[tokio::test]
    async fn bad_token_verifies_false_with_200() {
        let app = test_router();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/auth/verify",
            Some(json!({ "token": "garbage" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["valid"], false);
        assert!(body["data"].get("payload").is_none());

        let (status, body) = send(&app, Method::POST, "/api/v1/auth/verify", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["valid"], false);
    }

    #[tokio::test]
    async fn check_username_and_listing() {
        let app = test_router();

        let (_, body) = send(
            &app,
            Method::GET,
            "/api/v1/auth/check-username?username=tony",
            None,
        )
        .await;
        assert_eq!(body["data"]["available"], true);

        send(
            &app,
            Method::POST,
            "/api/v1/auth/register",
            Some(register_body("tony", "tony@stark.io", "ironman1")),
        )
        .await;

        let (_, body) = send(
            &app,
            Method::GET,
            "/api/v1/auth/check-username?username=tony",
            None,
        )
        .await;
        assert_eq!(body["data"]["available"], false);

        let (status, body) = send(&app, Method::GET, "/api/v1/accounts", None).await;
        assert_eq!(status, StatusCode::OK);
        let listed = body["data"].as_array().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["username"], "tony");
        assert!(listed[0].get("password_hash").is_none());
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = test_router();
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }
}
