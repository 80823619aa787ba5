use serde::{Deserialize, Serialize};
use time::Date;

use super::{convert, Currency, EmployeeId, EmploymentType, Level};
use crate::domain::ValidationError;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Reason recorded on the history entry created when an employee is added.
pub const HIRE_REASON: &str = "Hire";

/// One dated compensation change in an employee's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub salary: u64,
    pub bonus: u64,
    pub reason: String,
}

impl HistoryEntry {
    pub fn new(date: Date, salary: u64, bonus: u64, reason: impl Into<String>) -> Self {
        Self {
            date,
            salary,
            bonus,
            reason: reason.into(),
        }
    }

    pub fn hire(date: Date, salary: u64, bonus: u64) -> Self {
        Self::new(date, salary, bonus, HIRE_REASON)
    }
}

/// A stored employee compensation record.
///
/// `position` is a position *name*. It is resolved against the position
/// collection at read time and may dangle once that position is renamed or
/// deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub level: Level,
    pub salary: u64,
    pub bonus: u64,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    #[serde(with = "iso_date")]
    pub start_date: Date,
    /// Copied from the position when the record is created, never kept in sync.
    pub department: String,
    pub currency: Currency,
    pub history: Vec<HistoryEntry>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn salary_in(&self, currency: Currency) -> u64 {
        convert(self.salary, self.currency, currency)
    }

    pub fn bonus_in(&self, currency: Currency) -> u64 {
        convert(self.bonus, self.currency, currency)
    }
}

/// Caller-supplied fields for adding or replacing an employee.
///
/// Identity and history are owned by the store and never taken from a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub level: Level,
    pub salary: u64,
    #[serde(default)]
    pub bonus: u64,
    #[serde(rename = "type", default)]
    pub employment_type: EmploymentType,
    #[serde(default, with = "iso_date::option")]
    pub start_date: Option<Date>,
    /// When empty, the department of the referenced position is used.
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub currency: Currency,
}

impl EmployeeDraft {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        position: impl Into<String>,
        level: Level,
        salary: u64,
        start_date: Date,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            position: position.into(),
            level,
            salary,
            bonus: 0,
            employment_type: EmploymentType::default(),
            start_date: Some(start_date),
            department: None,
            currency: Currency::default(),
        }
    }

    pub fn with_bonus(mut self, bonus: u64) -> Self {
        self.bonus = bonus;
        self
    }

    pub fn with_type(mut self, employment_type: EmploymentType) -> Self {
        self.employment_type = employment_type;
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Checks the required fields, reporting the first one missing.
    ///
    /// A salary of zero counts as missing.
    pub fn validate(&self) -> Result<Date, ValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(ValidationError::MissingFirstName);
        }
        if self.last_name.trim().is_empty() {
            return Err(ValidationError::MissingLastName);
        }
        if self.position.trim().is_empty() {
            return Err(ValidationError::MissingPosition);
        }
        if self.salary == 0 {
            return Err(ValidationError::MissingSalary);
        }
        self.start_date.ok_or(ValidationError::MissingStartDate)
    }

    /// Builds the stored record once the draft has been validated.
    pub(crate) fn into_employee(
        self,
        id: EmployeeId,
        start_date: Date,
        department: String,
        history: Vec<HistoryEntry>,
    ) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            position: self.position,
            level: self.level,
            salary: self.salary,
            bonus: self.bonus,
            employment_type: self.employment_type,
            start_date,
            department,
            currency: self.currency,
            history,
        }
    }
}

/// Pre-fills an edit of an existing record.
impl From<&Employee> for EmployeeDraft {
    fn from(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            position: employee.position.clone(),
            level: employee.level,
            salary: employee.salary,
            bonus: employee.bonus,
            employment_type: employee.employment_type,
            start_date: Some(employee.start_date),
            department: Some(employee.department.clone()),
            currency: employee.currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn draft() -> EmployeeDraft {
        EmployeeDraft::new(
            "Marie",
            "Dupont",
            "Frontend Developer",
            Level::Senior,
            65000,
            date!(2021 - 03 - 15),
        )
    }

    #[test]
    fn valid_draft_yields_start_date() {
        assert_eq!(draft().validate(), Ok(date!(2021 - 03 - 15)));
    }

    #[test]
    fn rejects_missing_fields_in_order() {
        let mut d = draft();
        d.first_name = "  ".to_string();
        assert_eq!(d.validate(), Err(ValidationError::MissingFirstName));

        let mut d = draft();
        d.last_name.clear();
        assert_eq!(d.validate(), Err(ValidationError::MissingLastName));

        let mut d = draft();
        d.position.clear();
        assert_eq!(d.validate(), Err(ValidationError::MissingPosition));

        let mut d = draft();
        d.salary = 0;
        assert_eq!(d.validate(), Err(ValidationError::MissingSalary));

        let mut d = draft();
        d.start_date = None;
        assert_eq!(d.validate(), Err(ValidationError::MissingStartDate));
    }

    #[test]
    fn bonus_is_optional() {
        assert_eq!(draft().bonus, 0);
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn converts_salary_and_bonus() {
        let employee = draft()
            .with_bonus(5000)
            .with_currency(Currency::Usd)
            .into_employee(
                EmployeeId::new(1),
                date!(2021 - 03 - 15),
                "Tech".to_string(),
                vec![],
            );
        assert_eq!(employee.salary_in(Currency::Usd), 65000);
        // 65000 / 0.92 = 70652.17..
        assert_eq!(employee.salary_in(Currency::Eur), 70652);
        assert_eq!(employee.bonus_in(Currency::Eur), 5435);
        assert_eq!(employee.full_name(), "Marie Dupont");
    }

    #[test]
    fn serializes_with_wire_names() {
        let employee = draft().into_employee(
            EmployeeId::new(7),
            date!(2021 - 03 - 15),
            "Tech".to_string(),
            vec![HistoryEntry::hire(date!(2021 - 03 - 15), 65000, 0)],
        );
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["firstName"], "Marie");
        assert_eq!(json["type"], "Permanent");
        assert_eq!(json["startDate"], "2021-03-15");
        assert_eq!(json["currency"], "EUR");
        assert_eq!(json["history"][0]["reason"], "Hire");
    }

    #[test]
    fn draft_from_record_keeps_editable_fields() {
        let start = date!(2021 - 03 - 15);
        let employee = draft()
            .with_department("Tech")
            .into_employee(EmployeeId::new(1), start, "Tech".into(), vec![HistoryEntry::hire(start, 65000, 0)]);
        let edit = EmployeeDraft::from(&employee);
        assert_eq!(edit.validate(), Ok(start));
        assert_eq!(edit.department.as_deref(), Some("Tech"));
        assert_eq!(edit.salary, 65000);
    }
}
