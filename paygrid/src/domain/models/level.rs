use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Seniority tier shared by positions (salary grid rows) and employees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString,
)]
#[serde(rename_all = "PascalCase")]
pub enum Level {
    #[strum(ascii_case_insensitive, serialize = "Junior")]
    Junior,
    #[strum(ascii_case_insensitive, serialize = "Intermediate")]
    Intermediate,
    #[strum(ascii_case_insensitive, serialize = "Senior")]
    Senior,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Junior, Level::Intermediate, Level::Senior];
}

/// Contract type of an employee.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "PascalCase")]
pub enum EmploymentType {
    #[default]
    #[strum(ascii_case_insensitive, serialize = "Permanent")]
    Permanent,
    #[strum(ascii_case_insensitive, serialize = "Contractor")]
    Contractor,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn levels_are_ordered_by_seniority() {
        assert!(Level::Junior < Level::Intermediate);
        assert!(Level::Intermediate < Level::Senior);
        assert_eq!(Level::ALL.len(), 3);
    }

    #[test]
    fn parse_level() {
        assert_eq!(Level::from_str("senior").unwrap(), Level::Senior);
        assert_eq!(Level::from_str("Intermediate").unwrap(), Level::Intermediate);
        assert!(Level::from_str("Principal").is_err());
    }

    #[test]
    fn parse_employment_type() {
        assert_eq!(
            EmploymentType::from_str("contractor").unwrap(),
            EmploymentType::Contractor
        );
        assert_eq!(EmploymentType::Permanent.to_string(), "Permanent");
    }
}
