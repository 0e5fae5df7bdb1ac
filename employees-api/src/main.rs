//! # Employees API Server
//!
//! HTTP server exposing the Employees resource: list, get by id, create,
//! delete by id, and delete-last. Built with Axum over an in-memory record
//! store; every business outcome is an HTTP 200 envelope whose body key
//! (`success` / `error` / `skipped`, or the data itself) carries the result.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p employees-api
//! ```

use employees_api::{
    app::{build_router, AppState},
    config::Config,
};
use employees_core::store::EmployeeStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employees_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Employees API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let store = if config.store.seed {
        EmployeeStore::seeded()
    } else {
        EmployeeStore::new()
    };
    tracing::info!(employees = store.len().await, "record store initialized");

    let bind_address = config.bind_address();
    let state = AppState::new(store, config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
