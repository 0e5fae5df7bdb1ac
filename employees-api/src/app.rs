/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use employees_api::{app::AppState, config::Config};
/// use employees_core::store::EmployeeStore;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let state = AppState::new(EmployeeStore::seeded(), config);
/// let app = employees_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    routing::{get, post},
    Router,
};
use employees_core::store::EmployeeStore;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Employee record store
    pub store: Arc<EmployeeStore>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(store: EmployeeStore, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                     # Health check
/// └── /employees/
///     ├── GET  /                  # List all employees
///     ├── GET  /:id               # Get one employee
///     ├── POST /create            # Create an employee
///     ├── POST /delete            # Delete by employee_id parameter
///     └── POST /delete/last       # Delete the most recent employee
/// ```
///
/// Every business outcome is HTTP 200 `application/json`; the body key
/// (`success` / `error` / `skipped`, or the data itself) carries the
/// semantics. No authentication: the contract has none.
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer, permissive)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Health check
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // Static segments (create, delete) take precedence over :id
    let employee_routes = Router::new()
        .route("/", get(routes::employees::list_employees))
        .route("/:id", get(routes::employees::get_employee))
        .route("/create", post(routes::employees::create_employee))
        .route("/delete", post(routes::employees::delete_employee))
        .route("/delete/last", post(routes::employees::delete_last_employee));

    Router::new()
        .merge(health_routes)
        .nest("/employees", employee_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
