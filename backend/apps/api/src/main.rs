//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are
//! handled inside the feature crates.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use auth::{
    AuthConfig, AuthGateState, PgAuthRepository, TokenService, auth_router, require_bearer_auth,
};
use axum::{
    Json, Router, http,
    http::{Method, header},
    middleware,
    routing::get,
};
use inventory::{PgProductRepository, products_router};
use orders::{PgOrderRepository, orders_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,inventory=info,orders=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Token configuration
    let auth_config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load secret from environment
        let token_secret =
            env::var("AUTH_TOKEN_SECRET").expect("AUTH_TOKEN_SECRET must be set in production");
        AuthConfig {
            token_secret,
            ..AuthConfig::default()
        }
    };

    let tokens = Arc::new(TokenService::new(&auth_config));
    let gate = AuthGateState::new(tokens.clone());

    // Repositories
    let user_repo = PgAuthRepository::new(pool.clone());
    let product_repo = PgProductRepository::new(pool.clone());
    let order_repo = PgOrderRepository::new(pool.clone());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Everything except registration, login, and the status probe sits
    // behind the bearer-token gate.
    let protected = Router::new()
        .nest("/api/products", products_router(product_repo.clone()))
        .nest("/api/orders", orders_router(order_repo, product_repo))
        .layer(middleware::from_fn_with_state(gate, require_bearer_auth));

    let app = Router::new()
        .nest("/api/auth", auth_router(user_repo, tokens))
        .route("/api/status", get(status))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// GET /api/status
async fn status() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "server": "ATC Next Gen API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
