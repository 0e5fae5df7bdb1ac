/// Shared test utilities for integration tests
///
/// Builds the full router around an in-memory store and drives it through
/// `tower::ServiceExt::oneshot`, so the tests exercise exactly what a real
/// HTTP client would see without binding a socket.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use employees_api::{
    app::{build_router, AppState},
    config::{ApiConfig, Config, StoreConfig},
};
use employees_core::store::EmployeeStore;
use serde_json::Value;
use tower::ServiceExt as _;

/// Test context holding the application under test
pub struct TestContext {
    pub app: Router,
}

impl TestContext {
    /// Context with the demo roster loaded (employee 1 exists)
    pub fn seeded() -> Self {
        Self::with_store(EmployeeStore::seeded())
    }

    /// Context with an empty store
    pub fn empty() -> Self {
        Self::with_store(EmployeeStore::new())
    }

    fn with_store(store: EmployeeStore) -> Self {
        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            store: StoreConfig { seed: false },
        };
        Self {
            app: build_router(AppState::new(store, config)),
        }
    }

    /// Sends a GET request, returning status and parsed JSON body
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.call("GET", uri).await
    }

    /// Sends a POST request, returning status and parsed JSON body
    pub async fn post(&self, uri: &str) -> (StatusCode, Value) {
        self.call("POST", uri).await
    }

    async fn call(&self, method: &str, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body)
            .unwrap_or_else(|e| panic!("non-JSON body ({}): {:?}", e, body));
        (status, json)
    }
}

/// Asserts that a JSON value has the employee shape pinned by
/// `schemas/employeesData.json`
pub fn assert_employee_shape(value: &Value) {
    assert!(
        value["employee_id"].is_u64(),
        "employee_id must be a positive integer: {value}"
    );
    assert!(value["first_name"].is_string(), "first_name must be a string");
    assert!(value["last_name"].is_string(), "last_name must be a string");
    assert!(value["reports_to"].is_i64(), "reports_to must be an integer");
    for optional in [
        "title",
        "birth_date",
        "hire_date",
        "address",
        "city",
        "state",
        "country",
        "postal_code",
        "phone",
        "fax",
        "email",
    ] {
        let field = &value[optional];
        assert!(
            field.is_string() || field.is_null(),
            "{optional} must be a string or null: {field}"
        );
    }
}
