use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod auth;
mod config;
mod database;
mod error;
mod handlers;
mod middleware;
mod state;
mod types;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env();
    tracing::info!("Starting contracts API in {:?} mode", config.environment);

    let state = Arc::new(AppState::init(config).await?);

    let bind_addr = format!("0.0.0.0:{}", state.config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    println!("🚀 Contracts API server listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        // Public routes (no authentication)
        .merge(public_routes())
        // Protected API (bearer token required)
        .merge(protected_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<Arc<AppState>> {
    use handlers::public;

    Router::new()
        .route("/api/auth/login", post(public::auth::login))
        .route("/api/users/create", post(public::users::create))
}

fn protected_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use handlers::protected;

    Router::new()
        .route("/api/auth/me", get(protected::auth::me))
        .route("/api/users", get(protected::users::list))
        .route(
            "/api/contracts/:company_id/:inicio",
            get(protected::contracts::lookup),
        )
        .route("/api/companies", get(protected::companies::list))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::jwt_auth_middleware,
        ))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Contracts API",
        "version": version,
        "description": "Company and contract management backend",
        "endpoints": {
            "login": "POST /api/auth/login (public)",
            "register": "POST /api/users/create (public)",
            "me": "GET /api/auth/me (protected)",
            "users": "GET /api/users (protected, admin)",
            "contracts": "GET /api/contracts/:companyId/:inicio (protected)",
            "companies": "GET /api/companies (protected)",
        }
    }))
}

async fn health(State(state): State<Arc<AppState>>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::pool::health_check(&state.db).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
