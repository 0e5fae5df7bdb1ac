/// Request parameter validation
///
/// Pure functions that check a raw parameter map before any mutation happens.
/// Rules run in a fixed order and the first failing rule decides the error,
/// so repeated invalid requests always produce the same message:
///
/// 1. `first_name` and `last_name` must be present and non-empty
///    → "Field names are required"
/// 2. `birth_date` / `hire_date`, when given, must parse as `YYYY-MM-DD`
///    → "Verify your parameters"
/// 3. `reports_to`, when given, must parse as an integer
///    → "Verify your parameters"
///
/// Identifier parameters on get/delete requests are checked separately by
/// [`parse_employee_id`] → "Invalid employee ID".
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use employees_core::validate::validate_new_employee;
///
/// let mut params = HashMap::new();
/// params.insert("first_name".to_string(), "Test".to_string());
/// params.insert("last_name".to_string(), "API".to_string());
/// params.insert("birth_date".to_string(), "2000-03-13".to_string());
///
/// let payload = validate_new_employee(&params).unwrap();
/// assert_eq!(payload.first_name, "Test");
/// ```

use crate::model::NewEmployee;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Date format accepted for `birth_date` and `hire_date`
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation failure, with `Display` strings matching the API contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `first_name` or `last_name` missing or empty on create
    #[error("Field names are required")]
    MissingNames,

    /// A date or integer field failed to parse on create
    #[error("Verify your parameters")]
    BadParameters,

    /// A get/delete identifier is not an integer
    #[error("Invalid employee ID")]
    InvalidId,
}

/// Validates creation parameters into a [`NewEmployee`] payload
///
/// Runs the contract's rules in order and returns the first violation.
/// Never touches the store: a failure here guarantees no partial write.
pub fn validate_new_employee(
    params: &HashMap<String, String>,
) -> Result<NewEmployee, ValidationError> {
    let first_name = non_empty(params, "first_name").ok_or(ValidationError::MissingNames)?;
    let last_name = non_empty(params, "last_name").ok_or(ValidationError::MissingNames)?;

    let birth_date = parse_date(params, "birth_date")?;
    let hire_date = parse_date(params, "hire_date")?;

    let reports_to = match non_empty(params, "reports_to") {
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::BadParameters)?,
        None => 0,
    };

    Ok(NewEmployee {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        title: optional(params, "title"),
        birth_date,
        hire_date,
        address: optional(params, "address"),
        city: optional(params, "city"),
        state: optional(params, "state"),
        country: optional(params, "country"),
        postal_code: optional(params, "postal_code"),
        phone: optional(params, "phone"),
        fax: optional(params, "fax"),
        email: optional(params, "email"),
        reports_to,
    })
}

/// Parses an identifier parameter for get/delete requests
///
/// Any integer is well-formed input, including negative ones: a request for
/// id `-1` is valid but matches no record, which the contract reports as
/// `skipped` rather than `error`. Non-integer input is the only failure.
pub fn parse_employee_id(raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidId)
}

/// Returns the parameter value if present and non-empty
fn non_empty<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

/// Copies an optional free-text parameter, treating empty as absent
fn optional(params: &HashMap<String, String>, key: &str) -> Option<String> {
    non_empty(params, key).map(str::to_string)
}

/// Parses an optional date parameter in `YYYY-MM-DD` format
fn parse_date(
    params: &HashMap<String, String>,
    key: &str,
) -> Result<Option<NaiveDate>, ValidationError> {
    match non_empty(params, key) {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
            .map(Some)
            .map_err(|_| ValidationError::BadParameters),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_missing_first_name_is_rejected() {
        let err = validate_new_employee(&params(&[("last_name", "API")])).unwrap_err();
        assert_eq!(err, ValidationError::MissingNames);
        assert_eq!(err.to_string(), "Field names are required");
    }

    #[test]
    fn test_missing_last_name_is_rejected() {
        let err = validate_new_employee(&params(&[("first_name", "Test")])).unwrap_err();
        assert_eq!(err, ValidationError::MissingNames);
    }

    #[test]
    fn test_empty_name_counts_as_missing() {
        let err =
            validate_new_employee(&params(&[("first_name", "Test"), ("last_name", "")]))
                .unwrap_err();
        assert_eq!(err, ValidationError::MissingNames);
    }

    #[test]
    fn test_name_check_runs_before_date_check() {
        // Both rules are violated; the name rule must win.
        let err = validate_new_employee(&params(&[("birth_date", "13.03.2007")])).unwrap_err();
        assert_eq!(err, ValidationError::MissingNames);
    }

    #[test]
    fn test_bad_birth_date_is_rejected() {
        let err = validate_new_employee(&params(&[
            ("first_name", "TestFail"),
            ("last_name", "TestFail"),
            ("birth_date", "13.03.2007"),
        ]))
        .unwrap_err();
        assert_eq!(err, ValidationError::BadParameters);
        assert_eq!(err.to_string(), "Verify your parameters");
    }

    #[test]
    fn test_bad_hire_date_is_rejected() {
        let err = validate_new_employee(&params(&[
            ("first_name", "Test"),
            ("last_name", "API"),
            ("hire_date", "2017/09/25"),
        ]))
        .unwrap_err();
        assert_eq!(err, ValidationError::BadParameters);
    }

    #[test]
    fn test_non_numeric_reports_to_is_rejected() {
        let err = validate_new_employee(&params(&[
            ("first_name", "TestFail"),
            ("last_name", "TestFail"),
            ("reports_to", "something"),
        ]))
        .unwrap_err();
        assert_eq!(err, ValidationError::BadParameters);
    }

    #[test]
    fn test_valid_payload_is_normalized() {
        let payload = validate_new_employee(&params(&[
            ("first_name", "Test"),
            ("last_name", "API"),
            ("birth_date", "2000-03-13"),
            ("hire_date", "2017-09-25"),
            ("reports_to", "0"),
            ("city", "Muenchen"),
            ("email", "testapi@mailinator.com"),
        ]))
        .unwrap();

        assert_eq!(payload.first_name, "Test");
        assert_eq!(payload.birth_date, NaiveDate::from_ymd_opt(2000, 3, 13));
        assert_eq!(payload.hire_date, NaiveDate::from_ymd_opt(2017, 9, 25));
        assert_eq!(payload.reports_to, 0);
        assert_eq!(payload.city.as_deref(), Some("Muenchen"));
        assert_eq!(payload.title, None);
    }

    #[test]
    fn test_reports_to_defaults_to_zero() {
        let payload =
            validate_new_employee(&params(&[("first_name", "Test"), ("last_name", "API")]))
                .unwrap();
        assert_eq!(payload.reports_to, 0);
    }

    #[test]
    fn test_parse_employee_id_accepts_integers() {
        assert_eq!(parse_employee_id("1"), Ok(1));
        assert_eq!(parse_employee_id("-1"), Ok(-1));
        assert_eq!(parse_employee_id(" 42 "), Ok(42));
    }

    #[test]
    fn test_parse_employee_id_rejects_non_integers() {
        for raw in ["a1", "TestFail", "", "1.5"] {
            let err = parse_employee_id(raw).unwrap_err();
            assert_eq!(err, ValidationError::InvalidId);
            assert_eq!(err.to_string(), "Invalid employee ID");
        }
    }
}
