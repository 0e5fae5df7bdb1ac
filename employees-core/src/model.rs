/// Employee record types
///
/// This module provides the `Employee` record stored by the service and the
/// `NewEmployee` payload produced by validation before insertion.
///
/// # Wire shape
///
/// Records serialize to the shape pinned by `schemas/employees.json` and
/// `schemas/employeesData.json`:
///
/// ```json
/// {
///   "employee_id": 1,
///   "first_name": "Andrew",
///   "last_name": "Adams",
///   "title": "General Manager",
///   "birth_date": "1962-02-18",
///   "hire_date": "2002-08-14",
///   "address": "11120 Jasper Ave NW",
///   "city": "Edmonton",
///   "state": "AB",
///   "country": "Canada",
///   "postal_code": "T5K 2N1",
///   "phone": "+1 (780) 428-9482",
///   "fax": "+1 (780) 428-3457",
///   "email": "andrew@chinookcorp.com",
///   "reports_to": 0
/// }
/// ```
///
/// Optional fields are serialized as `null` when absent; dates serialize as
/// `YYYY-MM-DD` strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique record ID, assigned by the store, immutable once created
    pub employee_id: u32,

    /// First name (non-empty)
    pub first_name: String,

    /// Last name (non-empty)
    pub last_name: String,

    /// Job title
    pub title: Option<String>,

    /// Date of birth
    pub birth_date: Option<NaiveDate>,

    /// Date of hire
    pub hire_date: Option<NaiveDate>,

    /// Street address
    pub address: Option<String>,

    /// City
    pub city: Option<String>,

    /// State or province
    pub state: Option<String>,

    /// Country
    pub country: Option<String>,

    /// Postal code
    pub postal_code: Option<String>,

    /// Phone number
    pub phone: Option<String>,

    /// Fax number
    pub fax: Option<String>,

    /// Email address
    pub email: Option<String>,

    /// `employee_id` of this employee's manager, or `0` for no manager
    pub reports_to: i64,
}

impl Employee {
    /// Builds a full record from a validated payload and a store-assigned id
    pub fn from_new(employee_id: u32, new: NewEmployee) -> Self {
        Self {
            employee_id,
            first_name: new.first_name,
            last_name: new.last_name,
            title: new.title,
            birth_date: new.birth_date,
            hire_date: new.hire_date,
            address: new.address,
            city: new.city,
            state: new.state,
            country: new.country,
            postal_code: new.postal_code,
            phone: new.phone,
            fax: new.fax,
            email: new.email,
            reports_to: new.reports_to,
        }
    }
}

/// Validated employee-creation payload
///
/// Produced only by [`crate::validate::validate_new_employee`]; everything in
/// here has already passed the contract's validation rules.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewEmployee {
    /// First name (non-empty, required)
    pub first_name: String,

    /// Last name (non-empty, required)
    pub last_name: String,

    /// Job title
    pub title: Option<String>,

    /// Date of birth
    pub birth_date: Option<NaiveDate>,

    /// Date of hire
    pub hire_date: Option<NaiveDate>,

    /// Street address
    pub address: Option<String>,

    /// City
    pub city: Option<String>,

    /// State or province
    pub state: Option<String>,

    /// Country
    pub country: Option<String>,

    /// Postal code
    pub postal_code: Option<String>,

    /// Phone number
    pub phone: Option<String>,

    /// Fax number
    pub fax: Option<String>,

    /// Email address
    pub email: Option<String>,

    /// Manager's `employee_id`, `0` for no manager
    pub reports_to: i64,
}
