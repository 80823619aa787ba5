use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::{convert, Currency, Level, PositionId};
use crate::domain::ValidationError;

/// A salary band. `min <= max` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u64,
    pub max: u64,
}

impl SalaryRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn convert(&self, from: Currency, to: Currency) -> Self {
        Self {
            min: convert(self.min, from, to),
            max: convert(self.max, from, to),
        }
    }

    pub fn contains(&self, salary: u64) -> bool {
        salary >= self.min && salary <= self.max
    }
}

/// Which end of a salary band to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
pub enum RangeBound {
    #[strum(ascii_case_insensitive, serialize = "min")]
    Min,
    #[strum(ascii_case_insensitive, serialize = "max")]
    Max,
}

/// A job position and its salary grid.
///
/// `name` acts as the key employees use to reference the position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: PositionId,
    pub name: String,
    pub department: String,
    pub description: String,
    pub skills: Vec<String>,
    pub objectives: String,
    /// Bands per level, denominated in [`Currency::BASE`].
    pub salary_ranges: BTreeMap<Level, SalaryRange>,
}

impl Position {
    pub fn range(&self, level: Level) -> Option<SalaryRange> {
        self.salary_ranges.get(&level).copied()
    }

    /// The band for `level` converted out of the base currency.
    pub fn range_in(&self, level: Level, currency: Currency) -> Option<SalaryRange> {
        self.range(level)
            .map(|range| range.convert(Currency::BASE, currency))
    }

    /// Replaces one bound of one band. A missing band is created with the
    /// other bound at zero.
    pub fn set_range_bound(&mut self, level: Level, bound: RangeBound, value: u64) {
        let range = self.salary_ranges.entry(level).or_default();
        match bound {
            RangeBound::Min => range.min = value,
            RangeBound::Max => range.max = value,
        }
    }
}

/// Caller-supplied fields for a new position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PositionDraft {
    pub name: String,
    pub department: String,
    pub description: String,
    pub skills: Vec<String>,
    pub objectives: String,
    pub salary_ranges: BTreeMap<Level, SalaryRange>,
}

impl PositionDraft {
    pub fn new(name: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_objectives(mut self, objectives: impl Into<String>) -> Self {
        self.objectives = objectives.into();
        self
    }

    pub fn with_skills(mut self, skills: Vec<String>) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_range(mut self, level: Level, min: u64, max: u64) -> Self {
        self.salary_ranges.insert(level, SalaryRange::new(min, max));
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingPositionName);
        }
        Ok(())
    }

    pub(crate) fn into_position(self, id: PositionId) -> Position {
        Position {
            id,
            name: self.name,
            department: self.department,
            description: self.description,
            skills: self.skills,
            objectives: self.objectives,
            salary_ranges: self.salary_ranges,
        }
    }
}

/// Splits a comma separated skill list, trimming entries and dropping empty ones.
pub fn parse_skills(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frontend() -> Position {
        PositionDraft::new("Frontend Developer", "Tech")
            .with_range(Level::Junior, 35000, 45000)
            .with_range(Level::Senior, 60000, 80000)
            .into_position(PositionId::new(1))
    }

    #[test]
    fn range_lookup_by_level() {
        let position = frontend();
        assert_eq!(position.range(Level::Junior), Some(SalaryRange::new(35000, 45000)));
        assert_eq!(position.range(Level::Intermediate), None);
    }

    #[test]
    fn range_converted_from_base() {
        let position = frontend();
        assert_eq!(
            position.range_in(Level::Junior, Currency::Usd),
            Some(SalaryRange::new(32200, 41400))
        );
        assert_eq!(
            position.range_in(Level::Junior, Currency::Eur),
            Some(SalaryRange::new(35000, 45000))
        );
    }

    #[test]
    fn set_bound_edits_single_cell() {
        let mut position = frontend();
        position.set_range_bound(Level::Junior, RangeBound::Max, 47000);
        assert_eq!(position.range(Level::Junior), Some(SalaryRange::new(35000, 47000)));

        position.set_range_bound(Level::Intermediate, RangeBound::Min, 45000);
        assert_eq!(
            position.range(Level::Intermediate),
            Some(SalaryRange::new(45000, 0))
        );
    }

    #[test]
    fn inverted_range_is_accepted() {
        let mut position = frontend();
        position.set_range_bound(Level::Senior, RangeBound::Min, 90000);
        let range = position.range(Level::Senior).unwrap();
        assert!(range.min > range.max);
        assert!(!range.contains(85000));
    }

    #[test]
    fn name_is_required() {
        assert_eq!(
            PositionDraft::new(" ", "Tech").validate(),
            Err(ValidationError::MissingPositionName)
        );
        assert!(PositionDraft::new("QA Engineer", "").validate().is_ok());
    }

    #[test]
    fn parse_skill_list() {
        assert_eq!(
            parse_skills("React, TypeScript ,, CSS,"),
            vec!["React", "TypeScript", "CSS"]
        );
        assert_eq!(parse_skills("Go, Go"), vec!["Go", "Go"]);
        assert!(parse_skills("  ").is_empty());
    }
}
