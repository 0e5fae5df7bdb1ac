/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `employees`: Employees resource (list, get, create, delete)

pub mod employees;
pub mod health;
