use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use ident_api::routes::router;
use ident_api::state::AppState;
use ident_core::services::AccountService;
use ident_infrastructure::database::{connection, PgAccountRepository};
use ident_security::password::PasswordService;
use ident_security::token::TokenService;
use ident_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    ident_shared::telemetry::init_telemetry();

    info!("ident server starting...");

    // Load configuration. A missing signing secret is fatal here, before
    // any request is served.
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to database
    info!("Connecting to database...");
    let pool = connection::create_pool(&config.database).await?;
    info!("Database connection established.");

    // Wire the account service
    let repository = Arc::new(PgAccountRepository::new(pool));
    let service = AccountService::new(
        repository,
        PasswordService::new(config.auth.hash_cost),
        TokenService::new(&config.auth.token_secret, config.auth.token_expiry_days),
    );

    let state = AppState {
        accounts: Arc::new(service),
        config: config.clone(),
    };

    // Build router
    let app = router(state).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
    );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
