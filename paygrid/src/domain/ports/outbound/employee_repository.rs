use crate::domain::models::{Employee, EmployeeId};

/// Outbound port for the employee collection.
///
/// Implementations own id generation: ids increase monotonically and are
/// never handed out twice, even after the employee holding one is deleted.
pub trait EmployeeRepository: Send + Sync + 'static {
    /// Reserve a fresh employee id.
    fn next_id(&self) -> EmployeeId;

    /// All employees in insertion order.
    fn list(&self) -> Vec<Employee>;

    fn get(&self, id: EmployeeId) -> Option<Employee>;

    fn insert(&self, employee: Employee);

    /// Apply `edit` to the record with this id while holding exclusive
    /// access, so concurrent edits are never lost. Returns `false` if there
    /// is no such record.
    fn update<F>(&self, id: EmployeeId, edit: F) -> bool
    where
        F: FnOnce(&mut Employee);

    /// Returns `false` if no employee had this id.
    fn remove(&self, id: EmployeeId) -> bool;
}
