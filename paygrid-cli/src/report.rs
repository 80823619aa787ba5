//! Plain-text and JSON rendering of service results.

use anyhow::Result;
use itertools::Itertools;
use paygrid::domain::{
    analysis::{Aggregation, EmployeeDetail, PositionSummary, RangeAlert},
    benchmark::{format_gap, BenchmarkComparison},
    models::{Currency, Employee, Position, SalaryRange},
    DerivedViews,
};
use serde::Serialize;

use crate::config::OutputFormat;

pub struct Report {
    pub format: OutputFormat,
    pub currency: Currency,
}

impl Report {
    pub fn new(format: OutputFormat, currency: Currency) -> Self {
        Self { format, currency }
    }

    /// Prints `value` as pretty JSON, or through `table` otherwise.
    pub fn emit<T: Serialize>(&self, value: &T, table: impl FnOnce(&Self, &T)) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Table => table(self, value),
        }
        Ok(())
    }

    fn money(&self, amount: u64) -> String {
        format!("{} {}", group_thousands(amount), self.currency)
    }

    fn band(&self, range: Option<SalaryRange>) -> String {
        match range {
            Some(range) => format!("{} - {}", self.money(range.min), self.money(range.max)),
            None => "-".to_string(),
        }
    }

    pub fn employees(&self, employees: &[Employee]) {
        println!(
            "{:>4}  {:<20} {:<20} {:<13} {:<11} {:>14}",
            "ID", "NAME", "POSITION", "LEVEL", "TYPE", "SALARY"
        );
        for employee in employees {
            println!(
                "{:>4}  {:<20} {:<20} {:<13} {:<11} {:>14}",
                employee.id.as_i64(),
                employee.full_name(),
                employee.position,
                employee.level.to_string(),
                employee.employment_type.to_string(),
                self.money(employee.salary_in(self.currency)),
            );
        }
    }

    pub fn employee_detail(&self, detail: &EmployeeDetail) {
        let employee = &detail.employee;
        println!("{} (#{})", employee.full_name(), employee.id);
        println!("  Position    {} / {}", employee.position, employee.level);
        println!("  Department  {}", employee.department);
        println!("  Type        {}", employee.employment_type);
        println!("  Seniority   {}", detail.seniority);
        println!("  Salary      {}", self.money(detail.salary));
        println!("  Bonus       {}", self.money(detail.bonus));
        println!("  Band        {}", self.band(detail.range));
        if let Some(placement) = detail.placement {
            println!("  Placement   {:.0}% of band", placement.percent);
        }
        println!("  History");
        for entry in &employee.history {
            println!(
                "    {}  {:>14} + {:>12}  {}",
                entry.date,
                self.money(paygrid::convert(entry.salary, employee.currency, self.currency)),
                self.money(paygrid::convert(entry.bonus, employee.currency, self.currency)),
                entry.reason
            );
        }
    }

    pub fn positions(&self, positions: &[Position]) {
        for position in positions {
            println!("#{} {} ({})", position.id, position.name, position.department);
            for (level, range) in &position.salary_ranges {
                let range = range.convert(Currency::BASE, self.currency);
                println!("    {:<13} {}", level.to_string(), self.band(Some(range)));
            }
        }
    }

    pub fn position_summary(&self, summary: &PositionSummary) {
        println!("{} (#{}) - {}", summary.name, summary.id, summary.department);
        if !summary.skills.is_empty() {
            println!("  Skills: {}", summary.skills.iter().join(", "));
        }
        println!("  Employees: {}", summary.employee_count);
        for level in &summary.levels {
            let average = level
                .average_salary
                .map(|average| self.money(average))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "    {:<13} {:>3} staff  avg {:>14}  band {}",
                level.level.to_string(),
                level.employee_count,
                average,
                self.band(level.range)
            );
        }
    }

    pub fn departments(&self, departments: &[String]) {
        for department in departments {
            println!("{department}");
        }
    }

    pub fn analysis(&self, aggregation: &Aggregation) {
        if aggregation.is_empty() {
            println!("No employees.");
            return;
        }
        println!(
            "{:<34} {:>3} {:>14} {:>14} {:>14} {:>14}  BAND",
            "GROUP", "N", "MIN", "MEDIAN", "AVERAGE", "MAX"
        );
        for (key, stats) in aggregation {
            println!(
                "{:<34} {:>3} {:>14} {:>14} {:>14} {:>14}  {}",
                format!("{} / {}", key.position, key.level),
                stats.count,
                self.money(stats.min),
                self.money(stats.median),
                self.money(stats.average),
                self.money(stats.max),
                self.band(stats.range),
            );
        }
    }

    pub fn alerts(&self, alerts: &[RangeAlert]) {
        if alerts.is_empty() {
            println!("All salaries are within range.");
            return;
        }
        for alert in alerts {
            println!(
                "{:<20} {:<20} {:<13} {:>14}  {}  ({})",
                alert.employee_name,
                alert.position,
                alert.level.to_string(),
                self.money(alert.salary),
                alert.label(),
                self.band(Some(alert.range)),
            );
        }
    }

    pub fn benchmark(&self, comparison: &BenchmarkComparison) {
        for benchmark in comparison.values() {
            println!(
                "{} [{}] avg gap {}",
                benchmark.position,
                benchmark.standing,
                format_gap(Some(benchmark.average_gap))
            );
            for level in &benchmark.levels {
                let average = level
                    .your_average
                    .map(|average| self.money(average))
                    .unwrap_or_else(|| "-".to_string());
                let references = level
                    .references
                    .iter()
                    .map(|reference| {
                        format!("{} {}", reference.source, self.money(reference.reference))
                    })
                    .join("  ");
                println!(
                    "    {:<13} {:>14}  {:>7}  {}",
                    level.level.to_string(),
                    average,
                    format_gap(level.gap_pct),
                    references
                );
            }
        }
    }

    pub fn views(&self, views: &DerivedViews) {
        println!("== Analysis");
        self.analysis(&views.aggregation);
        println!("\n== Range alerts");
        self.alerts(&views.alerts);
        println!("\n== Benchmark");
        self.benchmark(&views.benchmark);
    }
}

/// `1234567` as `1,234,567`.
fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let head = digits.len() % 3;
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - head) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
