use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use orgtree_api::database::manager::DatabaseManager;
use orgtree_api::{config, handlers, middleware};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting Orgtree API in {:?} mode", config.environment);

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("ORGTREE_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Orgtree API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Internal service-to-service lookups
        .merge(internal_routes())
        // Protected org unit routes
        .merge(org_unit_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn org_unit_routes() -> Router {
    use handlers::protected::org_unit;

    Router::new()
        .route(
            "/org-units/:code",
            get(org_unit::unit_get).put(org_unit::unit_put),
        )
        .layer(axum::middleware::from_fn(
            middleware::auth::jwt_auth_middleware,
        ))
}

fn internal_routes() -> Router {
    use handlers::internal;

    Router::new()
        .route("/org-units/internal/:id", get(internal::unit_get))
        .layer(axum::middleware::from_fn(
            middleware::network::internal_network_middleware,
        ))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Orgtree API",
            "version": version,
            "description": "Organizational-hierarchy management API",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "org_units": "GET|PUT /org-units/:code (protected)",
                "internal": "GET /org-units/internal/:id (internal network)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
