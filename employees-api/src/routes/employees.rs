/// Employees resource endpoints
///
/// Implements the Employees CRUD contract. Parameters arrive on the query
/// string (the reference clients send query parameters even on POST), and
/// every business outcome — success, validation error, or no-op — is
/// reported as HTTP 200 with an envelope body; see
/// [`employees_core::envelope::Outcome`].
///
/// # Endpoints
///
/// - `GET /employees` - List all employees
/// - `GET /employees/:id` - Get one employee
/// - `POST /employees/create` - Create an employee from field parameters
/// - `POST /employees/delete` - Delete by `employee_id` parameter
/// - `POST /employees/delete/last` - Delete the most recently created employee

use crate::app::AppState;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use employees_core::{envelope::Outcome, model::Employee, validate};
use std::collections::HashMap;

/// List all employees in insertion order
///
/// # Endpoint
///
/// ```text
/// GET /employees
/// ```
///
/// Response: JSON array matching `schemas/employees.json`.
pub async fn list_employees(State(state): State<AppState>) -> Json<Vec<Employee>> {
    Json(state.store.list().await)
}

/// Get a single employee by id
///
/// # Endpoint
///
/// ```text
/// GET /employees/:id
/// ```
///
/// Responses (all HTTP 200):
/// - the employee object, matching `schemas/employeesData.json`
/// - `{"error": "Invalid employee ID"}` when `:id` is not an integer
/// - `{"error": "Employee not found"}` when no record has that id
pub async fn get_employee(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match validate::parse_employee_id(&raw_id) {
        Ok(id) => id,
        Err(err) => {
            tracing::warn!(id = %raw_id, "rejected employee lookup");
            return Json(Outcome::from(err)).into_response();
        }
    };

    match state.store.get(id).await {
        Some(employee) => Json(employee).into_response(),
        None => Json(Outcome::employee_not_found()).into_response(),
    }
}

/// Create an employee from query parameters
///
/// # Endpoint
///
/// ```text
/// POST /employees/create?first_name=Test&last_name=API&birth_date=2000-03-13&...
/// ```
///
/// Validation runs before any mutation, so an invalid request never leaves a
/// partial record behind, and repeating it returns the same error.
///
/// Responses (all HTTP 200):
/// - `{"success": "Employee created"}`
/// - `{"error": "Field names are required"}` when either name is missing
/// - `{"error": "Verify your parameters"}` on a malformed date or `reports_to`
pub async fn create_employee(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Outcome> {
    match validate::validate_new_employee(&params) {
        Ok(payload) => {
            let id = state.store.insert(payload).await;
            tracing::info!(employee_id = id, "employee created");
            Json(Outcome::employee_created())
        }
        Err(err) => {
            tracing::warn!(%err, "employee creation rejected");
            Json(Outcome::from(err))
        }
    }
}

/// Delete an employee by the `employee_id` parameter
///
/// # Endpoint
///
/// ```text
/// POST /employees/delete?employee_id=4
/// ```
///
/// Responses (all HTTP 200):
/// - `{"success": "Number of rows deleted 1"}` when a row was removed
/// - `{"skipped": "No employee was deleted"}` when the id is a well-formed
///   integer that matches no record (deleting is idempotent)
/// - `{"error": "Invalid employee ID"}` when the id is not an integer
pub async fn delete_employee(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Outcome> {
    let raw = params.get("employee_id").map(String::as_str).unwrap_or("");
    let id = match validate::parse_employee_id(raw) {
        Ok(id) => id,
        Err(err) => {
            tracing::warn!(employee_id = %raw, "rejected employee delete");
            return Json(Outcome::from(err));
        }
    };

    match state.store.delete_by_id(id).await {
        0 => Json(Outcome::no_employee_deleted()),
        n => Json(Outcome::rows_deleted(n)),
    }
}

/// Delete the most recently created employee
///
/// # Endpoint
///
/// ```text
/// POST /employees/delete/last
/// ```
///
/// Responses (all HTTP 200):
/// - `{"success": "Number of rows deleted 1"}`
/// - `{"skipped": "No employee was deleted"}` when the store is empty
pub async fn delete_last_employee(State(state): State<AppState>) -> Json<Outcome> {
    match state.store.delete_last().await {
        0 => Json(Outcome::no_employee_deleted()),
        n => Json(Outcome::rows_deleted(n)),
    }
}
