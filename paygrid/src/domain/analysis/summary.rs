use itertools::Itertools;
use serde::Serialize;
use time::Date;

use super::{find_position, range_position, rounded_mean, RangePlacement};
use crate::domain::{
    models::{Currency, Employee, Level, Position, PositionId, SalaryRange},
    Seniority,
};

/// One level row of a position summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSummary {
    pub level: Level,
    pub range: Option<SalaryRange>,
    pub employee_count: usize,
    /// `None` when nobody holds the position at this level.
    pub average_salary: Option<u64>,
}

/// Headcount and pay overview for a single position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSummary {
    pub id: PositionId,
    pub name: String,
    pub department: String,
    pub skills: Vec<String>,
    pub employee_count: usize,
    pub levels_covered: Vec<Level>,
    pub levels: Vec<LevelSummary>,
}

pub fn position_summary(
    position: &Position,
    employees: &[Employee],
    currency: Currency,
) -> PositionSummary {
    let holders: Vec<&Employee> = employees
        .iter()
        .filter(|employee| employee.position == position.name)
        .collect();

    let levels: Vec<LevelSummary> = Level::ALL
        .into_iter()
        .map(|level| {
            let salaries: Vec<u64> = holders
                .iter()
                .filter(|employee| employee.level == level)
                .map(|employee| employee.salary_in(currency))
                .collect();
            LevelSummary {
                level,
                range: position.range_in(level, currency),
                employee_count: salaries.len(),
                average_salary: rounded_mean(&salaries),
            }
        })
        .collect();

    PositionSummary {
        id: position.id,
        name: position.name.clone(),
        department: position.department.clone(),
        skills: position.skills.clone(),
        employee_count: holders.len(),
        levels_covered: levels
            .iter()
            .filter(|summary| summary.employee_count > 0)
            .map(|summary| summary.level)
            .collect(),
        levels,
    }
}

/// Everything shown about one employee, in the display currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetail {
    pub employee: Employee,
    pub currency: Currency,
    pub salary: u64,
    pub bonus: u64,
    pub seniority: Seniority,
    pub range: Option<SalaryRange>,
    pub placement: Option<RangePlacement>,
}

pub fn employee_detail(
    employee: &Employee,
    positions: &[Position],
    currency: Currency,
    today: Date,
) -> EmployeeDetail {
    let salary = employee.salary_in(currency);
    let range = find_position(positions, &employee.position)
        .and_then(|position| position.range_in(employee.level, currency));

    EmployeeDetail {
        employee: employee.clone(),
        currency,
        salary,
        bonus: employee.bonus_in(currency),
        seniority: Seniority::between(employee.start_date, today),
        range,
        placement: range.and_then(|range| range_position(salary, range)),
    }
}

/// Distinct position departments in first-seen order.
pub fn departments(positions: &[Position]) -> Vec<String> {
    positions
        .iter()
        .map(|position| position.department.clone())
        .unique()
        .collect()
}
