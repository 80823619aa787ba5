use std::fmt;

use serde::Serialize;
use time::Date;

/// Time in role, approximated with 365-day years and 30-day months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Seniority {
    pub years: i64,
    pub months: i64,
}

impl Seniority {
    /// Computes seniority from the absolute day distance between the two
    /// dates, so a start date in the future still yields a value.
    pub fn between(start_date: Date, now: Date) -> Self {
        let days = (now - start_date).whole_days().abs();
        Self {
            years: days / 365,
            months: (days % 365) / 30,
        }
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y {}m", self.years, self.months)
    }
}

/// Display string for the time elapsed between `start_date` and `now`.
pub fn seniority(start_date: Date, now: Date) -> String {
    Seniority::between(start_date, now).to_string()
}
