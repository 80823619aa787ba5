use std::{collections::BTreeMap, fmt, str::FromStr};

use itertools::Itertools;
use serde::Serialize;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;

use crate::domain::models::{Currency, Employee, EmployeeId, Level, Position, SalaryRange};

/// Aggregation key: a position name paired with a level.
///
/// Rendered as `"<position>|<level>"`.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct GroupKey {
    pub position: String,
    pub level: Level,
}

impl GroupKey {
    pub fn new(position: impl Into<String>, level: Level) -> Self {
        Self {
            position: position.into(),
            level,
        }
    }

    pub fn of(employee: &Employee) -> Self {
        Self::new(employee.position.clone(), employee.level)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.position, self.level)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid group key: {0}")]
pub struct GroupKeyParseError(String);

impl FromStr for GroupKey {
    type Err = GroupKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (position, level) = s
            .rsplit_once('|')
            .ok_or_else(|| GroupKeyParseError(s.to_owned()))?;
        let level = Level::from_str(level).map_err(|_| GroupKeyParseError(s.to_owned()))?;
        Ok(Self::new(position, level))
    }
}

/// Salary distribution of one (position, level) group in the display currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStats {
    pub position: String,
    pub level: Level,
    pub employee_ids: Vec<EmployeeId>,
    /// Converted salaries, ascending.
    pub salaries: Vec<u64>,
    pub min: u64,
    pub q1: u64,
    /// Element at `n / 2`: the upper median for an even count.
    pub median: u64,
    pub q3: u64,
    pub max: u64,
    pub average: u64,
    pub count: usize,
    /// The position's band for this level, converted. `None` when the
    /// position no longer exists or has no band for the level.
    pub range: Option<SalaryRange>,
}

/// Groups keyed by `position|level`. Groups without employees are absent.
pub type Aggregation = BTreeMap<GroupKey, GroupStats>;

/// Mean of `values` rounded half up, `None` for an empty slice.
pub(crate) fn rounded_mean(values: &[u64]) -> Option<u64> {
    if values.is_empty() {
        return None;
    }
    // Summed in u128: any count of u64 salaries fits.
    let n = values.len() as u128;
    let sum: u128 = values.iter().map(|&value| u128::from(value)).sum();
    // The mean never exceeds the largest value, so it fits back into u64.
    Some(((2 * sum + n) / (2 * n)) as u64)
}

impl GroupStats {
    fn from_members(
        key: &GroupKey,
        members: &[&Employee],
        currency: Currency,
        range: Option<SalaryRange>,
    ) -> Option<Self> {
        let salaries: Vec<u64> = members
            .iter()
            .map(|employee| employee.salary_in(currency))
            .sorted_unstable()
            .collect();
        let n = salaries.len();
        let average = rounded_mean(&salaries)?;

        Some(Self {
            position: key.position.clone(),
            level: key.level,
            employee_ids: members.iter().map(|employee| employee.id).collect(),
            min: salaries[0],
            q1: salaries[n / 4],
            median: salaries[n / 2],
            q3: salaries[n * 3 / 4],
            max: salaries[n - 1],
            average,
            count: n,
            salaries,
            range,
        })
    }
}

/// Finds a position by name. Names are expected to be unique; the first
/// match wins otherwise.
pub fn find_position<'a>(positions: &'a [Position], name: &str) -> Option<&'a Position> {
    positions.iter().find(|position| position.name == name)
}

/// Computes per-group statistics from scratch.
///
/// Every (position name, level) pair carried by at least one employee gets a
/// group, including names that no longer match a position. Those groups have
/// no range.
pub fn aggregate(employees: &[Employee], positions: &[Position], currency: Currency) -> Aggregation {
    employees
        .iter()
        .into_group_map_by(|employee| GroupKey::of(employee))
        .into_iter()
        .filter_map(|(key, members)| {
            let range = find_position(positions, &key.position)
                .and_then(|position| position.range_in(key.level, currency));
            let stats = GroupStats::from_members(&key, &members, currency, range)?;
            Some((key, stats))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{EmployeeDraft, PositionDraft, PositionId};
    use time::macros::date;

    fn employee(id: i64, position: &str, level: Level, salary: u64, currency: Currency) -> Employee {
        EmployeeDraft::new("Test", format!("Employee{id}"), position, level, salary, date!(2022 - 01 - 01))
            .with_currency(currency)
            .into_employee(
                EmployeeId::new(id),
                date!(2022 - 01 - 01),
                String::new(),
                vec![],
            )
    }

    fn positions() -> Vec<Position> {
        vec![PositionDraft::new("Backend Developer", "Tech")
            .with_range(Level::Junior, 38000, 48000)
            .with_range(Level::Intermediate, 48000, 65000)
            .into_position(PositionId::new(1))]
    }

    #[test]
    fn median_takes_upper_element_for_even_count() {
        let employees = vec![
            employee(1, "Backend Developer", Level::Junior, 50000, Currency::Eur),
            employee(2, "Backend Developer", Level::Junior, 40000, Currency::Eur),
        ];
        let result = aggregate(&employees, &positions(), Currency::Eur);
        let stats = &result[&GroupKey::new("Backend Developer", Level::Junior)];
        assert_eq!(stats.salaries, vec![40000, 50000]);
        assert_eq!(stats.median, 50000);
        assert_eq!(stats.average, 45000);
        assert_eq!(stats.min, 40000);
        assert_eq!(stats.max, 50000);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.employee_ids, vec![EmployeeId::new(1), EmployeeId::new(2)]);
    }

    #[test]
    fn quartiles_use_floor_indices() {
        let employees: Vec<Employee> = [30000, 10000, 40000, 20000, 50000]
            .into_iter()
            .enumerate()
            .map(|(i, salary)| {
                employee(i as i64, "Backend Developer", Level::Intermediate, salary, Currency::Eur)
            })
            .collect();
        let result = aggregate(&employees, &positions(), Currency::Eur);
        let stats = &result[&GroupKey::new("Backend Developer", Level::Intermediate)];
        // n = 5: q1 at index 1, median at 2, q3 at 3
        assert_eq!(stats.q1, 20000);
        assert_eq!(stats.median, 30000);
        assert_eq!(stats.q3, 40000);
        assert_eq!(stats.average, 30000);
    }

    #[test]
    fn average_rounds_half_up() {
        let employees = vec![
            employee(1, "Backend Developer", Level::Junior, 40000, Currency::Eur),
            employee(2, "Backend Developer", Level::Junior, 40001, Currency::Eur),
        ];
        let result = aggregate(&employees, &positions(), Currency::Eur);
        assert_eq!(
            result[&GroupKey::new("Backend Developer", Level::Junior)].average,
            40001
        );
    }

    #[test]
    fn average_of_huge_salaries_does_not_overflow() {
        let huge = u64::MAX / 2 + 1;
        assert_eq!(rounded_mean(&[huge]), Some(huge));
        assert_eq!(rounded_mean(&[u64::MAX, u64::MAX, u64::MAX]), Some(u64::MAX));
        assert_eq!(rounded_mean(&[u64::MAX, u64::MAX - 1]), Some(u64::MAX));
        assert_eq!(rounded_mean(&[]), None);

        let employees = vec![
            employee(1, "Backend Developer", Level::Junior, huge, Currency::Eur),
            employee(2, "Backend Developer", Level::Junior, huge, Currency::Eur),
        ];
        let result = aggregate(&employees, &positions(), Currency::Eur);
        let stats = &result[&GroupKey::new("Backend Developer", Level::Junior)];
        assert_eq!(stats.average, huge);
        assert_eq!(stats.max, huge);
    }

    #[test]
    fn salaries_and_range_use_display_currency() {
        let employees = vec![
            employee(1, "Backend Developer", Level::Junior, 40000, Currency::Eur),
            employee(2, "Backend Developer", Level::Junior, 40000, Currency::Usd),
        ];
        let result = aggregate(&employees, &positions(), Currency::Usd);
        let stats = &result[&GroupKey::new("Backend Developer", Level::Junior)];
        assert_eq!(stats.salaries, vec![36800, 40000]);
        assert_eq!(stats.range, Some(SalaryRange::new(34960, 44160)));
    }

    #[test]
    fn empty_groups_are_omitted() {
        let employees = vec![employee(1, "Backend Developer", Level::Junior, 40000, Currency::Eur)];
        let result = aggregate(&employees, &positions(), Currency::Eur);
        assert_eq!(result.len(), 1);
        assert!(!result.contains_key(&GroupKey::new("Backend Developer", Level::Senior)));
        assert!(aggregate(&[], &positions(), Currency::Eur).is_empty());
    }

    #[test]
    fn unknown_position_yields_group_without_range() {
        let employees = vec![employee(1, "Archivist", Level::Senior, 50000, Currency::Eur)];
        let result = aggregate(&employees, &positions(), Currency::Eur);
        let stats = &result[&GroupKey::new("Archivist", Level::Senior)];
        assert_eq!(stats.range, None);
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn missing_band_yields_group_without_range() {
        let employees = vec![employee(1, "Backend Developer", Level::Senior, 70000, Currency::Eur)];
        let result = aggregate(&employees, &positions(), Currency::Eur);
        assert_eq!(result[&GroupKey::new("Backend Developer", Level::Senior)].range, None);
    }

    #[test]
    fn group_key_round_trips_through_text() {
        let key = GroupKey::new("Designer UX|UI", Level::Intermediate);
        assert_eq!(key.to_string(), "Designer UX|UI|Intermediate");
        assert_eq!(GroupKey::from_str("Designer UX|UI|Intermediate"), Ok(key));
        assert!(GroupKey::from_str("no separator").is_err());
        assert!(GroupKey::from_str("Designer|Lead").is_err());
    }

    #[test]
    fn aggregation_serializes_with_string_keys() {
        let employees = vec![employee(1, "Backend Developer", Level::Junior, 40000, Currency::Eur)];
        let result = aggregate(&employees, &positions(), Currency::Eur);
        let json = serde_json::to_value(&result).unwrap();
        let group = &json["Backend Developer|Junior"];
        assert_eq!(group["count"], 1);
        assert_eq!(group["range"]["min"], 38000);
    }
}
