use serde::{Deserialize, Serialize};

use super::{Employee, EmploymentType, Position};

/// Criteria for listing employees. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFilter {
    pub employment_type: Option<EmploymentType>,
    pub position: Option<String>,
    /// Matched against the department of the employee's position, looked up
    /// by name at filter time. The department stored on the employee is
    /// ignored.
    pub department: Option<String>,
}

impl EmployeeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, employment_type: EmploymentType) -> Self {
        self.employment_type = Some(employment_type);
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn matches(&self, employee: &Employee, positions: &[Position]) -> bool {
        if let Some(employment_type) = self.employment_type {
            if employee.employment_type != employment_type {
                return false;
            }
        }
        if let Some(ref position) = self.position {
            if &employee.position != position {
                return false;
            }
        }
        if let Some(ref department) = self.department {
            let resolved = positions
                .iter()
                .find(|p| p.name == employee.position)
                .map(|p| p.department.as_str());
            if resolved != Some(department.as_str()) {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, employees: &'a [Employee], positions: &[Position]) -> Vec<&'a Employee> {
        employees
            .iter()
            .filter(|employee| self.matches(employee, positions))
            .collect()
    }
}
