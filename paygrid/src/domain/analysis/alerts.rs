use serde::Serialize;
use strum::Display;

use super::find_position;
use crate::domain::models::{
    round_one_decimal, Currency, Employee, EmployeeId, Level, Position, SalaryRange,
};

/// Which side of the band a salary falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RangeDirection {
    Below,
    Above,
}

/// Where a salary sits relative to its band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeDeviation {
    pub direction: RangeDirection,
    /// Distance to the crossed bound as a percentage of that bound, one
    /// decimal. `None` when the crossed bound is zero.
    pub variance_pct: Option<f64>,
}

impl RangeDeviation {
    /// Variance with its sign: negative below the band, positive above it.
    pub fn signed_variance(&self) -> Option<f64> {
        self.variance_pct.map(|pct| match self.direction {
            RangeDirection::Below => -pct,
            RangeDirection::Above => pct,
        })
    }
}

/// Checks `salary` against `range`. Bounds are inclusive, so only a salary
/// strictly outside the band yields a deviation.
pub fn range_deviation(salary: u64, range: SalaryRange) -> Option<RangeDeviation> {
    let (direction, bound, distance) = if salary < range.min {
        (RangeDirection::Below, range.min, range.min - salary)
    } else if salary > range.max {
        (RangeDirection::Above, range.max, salary - range.max)
    } else {
        return None;
    };

    let variance_pct =
        (bound != 0).then(|| round_one_decimal(distance as f64 / bound as f64 * 100.0));
    Some(RangeDeviation {
        direction,
        variance_pct,
    })
}

/// An employee paid outside the band of their position and level.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeAlert {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub position: String,
    pub level: Level,
    /// Salary in the display currency.
    pub salary: u64,
    /// Band in the display currency.
    pub range: SalaryRange,
    #[serde(flatten)]
    pub deviation: RangeDeviation,
}

impl RangeAlert {
    /// Short label such as `-14.3% vs range`.
    pub fn label(&self) -> String {
        match self.deviation.signed_variance() {
            Some(variance) => format!("{variance:+.1}% vs range"),
            None => format!("{} range", self.deviation.direction),
        }
    }
}

/// Lists every employee whose converted salary lies outside their band.
///
/// Employees whose position cannot be found, or whose position has no band
/// for their level, have nothing to be compared with and are skipped.
pub fn range_alerts(
    employees: &[Employee],
    positions: &[Position],
    currency: Currency,
) -> Vec<RangeAlert> {
    employees
        .iter()
        .filter_map(|employee| {
            let Some(position) = find_position(positions, &employee.position) else {
                tracing::debug!(
                    employee_id = %employee.id,
                    position = %employee.position,
                    "employee references an unknown position"
                );
                return None;
            };
            let range = position.range_in(employee.level, currency)?;
            let salary = employee.salary_in(currency);
            let deviation = range_deviation(salary, range)?;
            Some(RangeAlert {
                employee_id: employee.id,
                employee_name: employee.full_name(),
                position: employee.position.clone(),
                level: employee.level,
                salary,
                range,
                deviation,
            })
        })
        .collect()
}

/// Placement of a salary inside its band, for gauges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangePlacement {
    /// `(salary - min) / (max - min) * 100`, one decimal. May leave 0..=100.
    pub percent: f64,
    /// `percent` limited to 0..=100.
    pub clamped: f64,
}

/// Computes how far into its band a salary sits. `None` for a zero-width band.
pub fn range_position(salary: u64, range: SalaryRange) -> Option<RangePlacement> {
    if range.max == range.min {
        return None;
    }
    let width = range.max as f64 - range.min as f64;
    let percent = (salary as f64 - range.min as f64) / width * 100.0;
    Some(RangePlacement {
        percent: round_one_decimal(percent),
        clamped: percent.clamp(0.0, 100.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{EmployeeDraft, PositionDraft, PositionId};
    use time::macros::date;

    fn employee(id: i64, position: &str, level: Level, salary: u64) -> Employee {
        EmployeeDraft::new("Alex", format!("Doe{id}"), position, level, salary, date!(2023 - 09 - 01))
            .into_employee(EmployeeId::new(id), date!(2023 - 09 - 01), String::new(), vec![])
    }

    fn designer() -> Vec<Position> {
        vec![PositionDraft::new("UX/UI Designer", "Design")
            .with_range(Level::Junior, 35000, 45000)
            .into_position(PositionId::new(4))]
    }

    #[test]
    fn below_range_variance_is_relative_to_min() {
        let deviation = range_deviation(30000, SalaryRange::new(35000, 45000)).unwrap();
        assert_eq!(deviation.direction, RangeDirection::Below);
        // (35000 - 30000) / 35000 * 100 = 14.285..
        assert_eq!(deviation.variance_pct, Some(14.3));
        assert_eq!(deviation.signed_variance(), Some(-14.3));
    }

    #[test]
    fn above_range_variance_is_relative_to_max() {
        let deviation = range_deviation(49500, SalaryRange::new(35000, 45000)).unwrap();
        assert_eq!(deviation.direction, RangeDirection::Above);
        assert_eq!(deviation.variance_pct, Some(10.0));
        assert_eq!(deviation.signed_variance(), Some(10.0));
    }

    #[test]
    fn bounds_are_inclusive() {
        let range = SalaryRange::new(35000, 45000);
        assert_eq!(range_deviation(35000, range), None);
        assert_eq!(range_deviation(45000, range), None);
        assert_eq!(range_deviation(40000, range), None);
    }

    #[test]
    fn zero_max_has_no_variance() {
        let deviation = range_deviation(1000, SalaryRange::new(0, 0)).unwrap();
        assert_eq!(deviation.direction, RangeDirection::Above);
        assert_eq!(deviation.variance_pct, None);
    }

    #[test]
    fn flags_only_out_of_range_employees() {
        let employees = vec![
            employee(1, "UX/UI Designer", Level::Junior, 30000),
            employee(2, "UX/UI Designer", Level::Junior, 42000),
            employee(3, "UX/UI Designer", Level::Senior, 99000),
            employee(4, "Deleted Position", Level::Junior, 1),
        ];
        let alerts = range_alerts(&employees, &designer(), Currency::Eur);
        assert_eq!(alerts.len(), 1);
        let alert = &alerts[0];
        assert_eq!(alert.employee_id, EmployeeId::new(1));
        assert_eq!(alert.employee_name, "Alex Doe1");
        assert_eq!(alert.range, SalaryRange::new(35000, 45000));
        assert_eq!(alert.label(), "-14.3% vs range");
    }

    #[test]
    fn label_carries_the_sign_of_the_crossed_bound() {
        let alert = |salary, range| RangeAlert {
            employee_id: EmployeeId::new(1),
            employee_name: "Alex Doe1".into(),
            position: "UX/UI Designer".into(),
            level: Level::Junior,
            salary,
            range,
            deviation: range_deviation(salary, range).unwrap(),
        };
        assert_eq!(alert(49500, SalaryRange::new(35000, 45000)).label(), "+10.0% vs range");
        assert_eq!(alert(1000, SalaryRange::new(0, 0)).label(), "above range");
    }

    #[test]
    fn alert_serializes_flat() {
        let employees = vec![employee(1, "UX/UI Designer", Level::Junior, 30000)];
        let alerts = range_alerts(&employees, &designer(), Currency::Eur);
        let json = serde_json::to_value(&alerts[0]).unwrap();
        assert_eq!(json["direction"], "below");
        assert_eq!(json["variancePct"], 14.3);
        assert_eq!(json["employeeId"], 1);
    }

    #[test]
    fn placement_within_band() {
        let range = SalaryRange::new(60000, 80000);
        let placement = range_position(65000, range).unwrap();
        assert_eq!(placement.percent, 25.0);
        assert_eq!(placement.clamped, 25.0);

        let placement = range_position(90000, range).unwrap();
        assert_eq!(placement.percent, 150.0);
        assert_eq!(placement.clamped, 100.0);

        let placement = range_position(50000, range).unwrap();
        assert_eq!(placement.percent, -50.0);
        assert_eq!(placement.clamped, 0.0);

        assert_eq!(range_position(50000, SalaryRange::new(0, 0)), None);
    }
}
