/// In-memory employee record store
///
/// The store is the only stateful component of the service. All mutation is
/// serialized through a single `tokio::sync::RwLock`; reads share the lock
/// and never block each other. Every write is immediately visible to
/// subsequent reads.
///
/// IDs come from a monotonic counter and are never reused within a process
/// lifetime, so deleting a record and creating a new one can never alias.
///
/// # Example
///
/// ```
/// use employees_core::{model::NewEmployee, store::EmployeeStore};
///
/// # async fn example() {
/// let store = EmployeeStore::new();
/// let id = store
///     .insert(NewEmployee {
///         first_name: "Test".to_string(),
///         last_name: "API".to_string(),
///         ..Default::default()
///     })
///     .await;
///
/// assert!(store.get(id as i64).await.is_some());
/// assert_eq!(store.delete_last().await, 1);
/// # }
/// ```

use crate::model::{Employee, NewEmployee};
use chrono::NaiveDate;
use tokio::sync::RwLock;

/// The authoritative collection of employee records
#[derive(Debug)]
pub struct EmployeeStore {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    /// Records in insertion order
    rows: Vec<Employee>,

    /// Next id to assign, monotonic, never reused
    next_id: u32,
}

impl EmployeeStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Creates a store pre-loaded with the demo roster
    ///
    /// The black-box contract assumes at least one record with id `1` exists
    /// before any create call, so the server seeds this roster by default.
    pub fn seeded() -> Self {
        let rows = demo_roster();
        let next_id = rows.iter().map(|e| e.employee_id + 1).max().unwrap_or(1);
        Self {
            inner: RwLock::new(Inner { rows, next_id }),
        }
    }

    /// Inserts a validated payload, assigning and returning the new id
    pub async fn insert(&self, new: NewEmployee) -> u32 {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.rows.push(Employee::from_new(id, new));
        tracing::debug!(employee_id = id, "employee inserted");
        id
    }

    /// Looks up a record by id
    ///
    /// Ids are compared as `i64` so that well-formed but impossible ids
    /// (negative, too large) simply match nothing.
    pub async fn get(&self, id: i64) -> Option<Employee> {
        let inner = self.inner.read().await;
        inner
            .rows
            .iter()
            .find(|e| i64::from(e.employee_id) == id)
            .cloned()
    }

    /// Returns all records in insertion order
    pub async fn list(&self) -> Vec<Employee> {
        self.inner.read().await.rows.clone()
    }

    /// Removes the record with the given id, returning the number removed
    pub async fn delete_by_id(&self, id: i64) -> usize {
        let mut inner = self.inner.write().await;
        let before = inner.rows.len();
        inner.rows.retain(|e| i64::from(e.employee_id) != id);
        let deleted = before - inner.rows.len();
        if deleted > 0 {
            tracing::debug!(employee_id = id, "employee deleted");
        }
        deleted
    }

    /// Removes the most recently inserted still-present record
    ///
    /// Returns the number removed: `1`, or `0` when the store is empty.
    pub async fn delete_last(&self) -> usize {
        let mut inner = self.inner.write().await;
        match inner.rows.pop() {
            Some(employee) => {
                tracing::debug!(employee_id = employee.employee_id, "last employee deleted");
                1
            }
            None => 0,
        }
    }

    /// Number of records currently present
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    /// True when no records are present
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Three-record demo roster, modeled on the classic Chinook employees
fn demo_roster() -> Vec<Employee> {
    vec![
        Employee {
            employee_id: 1,
            first_name: "Andrew".to_string(),
            last_name: "Adams".to_string(),
            title: Some("General Manager".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1962, 2, 18),
            hire_date: NaiveDate::from_ymd_opt(2002, 8, 14),
            address: Some("11120 Jasper Ave NW".to_string()),
            city: Some("Edmonton".to_string()),
            state: Some("AB".to_string()),
            country: Some("Canada".to_string()),
            postal_code: Some("T5K 2N1".to_string()),
            phone: Some("+1 (780) 428-9482".to_string()),
            fax: Some("+1 (780) 428-3457".to_string()),
            email: Some("andrew@chinookcorp.com".to_string()),
            reports_to: 0,
        },
        Employee {
            employee_id: 2,
            first_name: "Nancy".to_string(),
            last_name: "Edwards".to_string(),
            title: Some("Sales Manager".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1958, 12, 8),
            hire_date: NaiveDate::from_ymd_opt(2002, 5, 1),
            address: Some("825 8 Ave SW".to_string()),
            city: Some("Calgary".to_string()),
            state: Some("AB".to_string()),
            country: Some("Canada".to_string()),
            postal_code: Some("T2P 2T3".to_string()),
            phone: Some("+1 (403) 262-3443".to_string()),
            fax: Some("+1 (403) 262-3322".to_string()),
            email: Some("nancy@chinookcorp.com".to_string()),
            reports_to: 1,
        },
        Employee {
            employee_id: 3,
            first_name: "Jane".to_string(),
            last_name: "Peacock".to_string(),
            title: Some("Sales Support Agent".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1973, 8, 29),
            hire_date: NaiveDate::from_ymd_opt(2002, 4, 1),
            address: Some("1111 6 Ave SW".to_string()),
            city: Some("Calgary".to_string()),
            state: Some("AB".to_string()),
            country: Some("Canada".to_string()),
            postal_code: Some("T2P 5M5".to_string()),
            phone: Some("+1 (403) 262-3443".to_string()),
            fax: Some("+1 (403) 262-6712".to_string()),
            email: Some("jane@chinookcorp.com".to_string()),
            reports_to: 2,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_employee(first: &str, last: &str) -> NewEmployee {
        NewEmployee {
            first_name: first.to_string(),
            last_name: last.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = EmployeeStore::new();
        let a = store.insert(new_employee("Test", "One")).await;
        let b = store.insert(new_employee("Test", "Two")).await;
        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[tokio::test]
    async fn test_ids_are_never_reused_after_delete() {
        let store = EmployeeStore::new();
        let a = store.insert(new_employee("Test", "One")).await;
        assert_eq!(store.delete_by_id(a as i64).await, 1);
        let b = store.insert(new_employee("Test", "Two")).await;
        assert!(b > a);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = EmployeeStore::new();
        store.insert(new_employee("Test", "One")).await;
        store.insert(new_employee("Test", "Two")).await;
        store.insert(new_employee("Test", "Three")).await;

        let rows = store.list().await;
        let ids: Vec<u32> = rows.iter().map(|e| e.employee_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_get_returns_matching_record() {
        let store = EmployeeStore::new();
        let id = store.insert(new_employee("Test", "API")).await;

        let found = store.get(id as i64).await.unwrap();
        assert_eq!(found.last_name, "API");
        assert!(store.get(999).await.is_none());
        assert!(store.get(-1).await.is_none());
    }

    #[tokio::test]
    async fn test_delete_by_id_is_a_noop_for_absent_ids() {
        let store = EmployeeStore::new();
        store.insert(new_employee("Test", "API")).await;

        assert_eq!(store.delete_by_id(-1).await, 0);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_last_removes_most_recent() {
        let store = EmployeeStore::new();
        store.insert(new_employee("Test", "One")).await;
        let last = store.insert(new_employee("Test", "Two")).await;

        assert_eq!(store.delete_last().await, 1);
        assert!(store.get(last as i64).await.is_none());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_last_on_empty_store_deletes_nothing() {
        let store = EmployeeStore::new();
        assert_eq!(store.delete_last().await, 0);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_seeded_store_has_employee_one_and_fresh_ids() {
        let store = EmployeeStore::seeded();
        let first = store.get(1).await.unwrap();
        assert_eq!(first.first_name, "Andrew");

        // New inserts must not collide with seeded ids.
        let id = store.insert(new_employee("Test", "API")).await;
        assert_eq!(id, 4);
    }
}
