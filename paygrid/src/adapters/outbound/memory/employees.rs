use std::sync::{PoisonError, RwLock};

use super::IdSequence;
use crate::domain::{
    models::{Employee, EmployeeId},
    ports::outbound::EmployeeRepository,
};

/// Employee collection backed by a `Vec`, kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    employees: RwLock<Vec<Employee>>,
    ids: IdSequence,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the collection. New ids continue after the highest seeded id.
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        let last = employees
            .iter()
            .map(|employee| employee.id.as_i64())
            .max()
            .unwrap_or(0);
        Self {
            employees: RwLock::new(employees),
            ids: IdSequence::starting_after(last),
        }
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn next_id(&self) -> EmployeeId {
        EmployeeId::new(self.ids.next())
    }

    fn list(&self) -> Vec<Employee> {
        self.employees
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn get(&self, id: EmployeeId) -> Option<Employee> {
        self.employees
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|employee| employee.id == id)
            .cloned()
    }

    fn insert(&self, employee: Employee) {
        self.employees
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(employee);
    }

    fn update<F>(&self, id: EmployeeId, edit: F) -> bool
    where
        F: FnOnce(&mut Employee),
    {
        let mut employees = self.employees.write().unwrap_or_else(PoisonError::into_inner);
        match employees.iter_mut().find(|employee| employee.id == id) {
            Some(employee) => {
                edit(employee);
                true
            }
            None => false,
        }
    }

    fn remove(&self, id: EmployeeId) -> bool {
        let mut employees = self.employees.write().unwrap_or_else(PoisonError::into_inner);
        let before = employees.len();
        employees.retain(|employee| employee.id != id);
        employees.len() != before
    }
}
