/// Outcome envelopes
///
/// Every business outcome of the API is reported as HTTP 200 with a
/// single-key JSON object whose key discriminates the category:
///
/// - `{"success": "..."}` — the operation did what was asked
/// - `{"error": "..."}` — the input was rejected before any mutation
/// - `{"skipped": "..."}` — well-formed input that matched nothing (a no-op,
///   not a failure)
///
/// Transport status stays uniform on purpose: clients branch on one status
/// check plus the body key, and can reserve non-200 for real transport
/// failures. The messages here are part of the contract and must not be
/// reworded.

use crate::validate::ValidationError;
use serde::{Deserialize, Serialize};

/// Business outcome of a service operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Operation completed
    Success(String),

    /// Input rejected by validation
    Error(String),

    /// Well-formed request that matched no record
    Skipped(String),
}

impl Outcome {
    /// Envelope for a successful create
    pub fn employee_created() -> Self {
        Outcome::Success("Employee created".to_string())
    }

    /// Envelope for a delete that removed `n` rows
    pub fn rows_deleted(n: usize) -> Self {
        Outcome::Success(format!("Number of rows deleted {n}"))
    }

    /// Envelope for a delete that matched no record
    pub fn no_employee_deleted() -> Self {
        Outcome::Skipped("No employee was deleted".to_string())
    }

    /// Envelope for a well-formed lookup that matched no record
    pub fn employee_not_found() -> Self {
        Outcome::Error("Employee not found".to_string())
    }
}

impl From<ValidationError> for Outcome {
    fn from(err: ValidationError) -> Self {
        Outcome::Error(err.to_string())
    }
}
