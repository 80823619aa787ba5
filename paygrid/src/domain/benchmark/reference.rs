use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::domain::models::Level;

/// One reference salary per level, in the base currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LevelSalaries {
    pub junior: u64,
    pub intermediate: u64,
    pub senior: u64,
}

impl LevelSalaries {
    pub fn new(junior: u64, intermediate: u64, senior: u64) -> Self {
        Self {
            junior,
            intermediate,
            senior,
        }
    }

    pub fn get(&self, level: Level) -> u64 {
        match level {
            Level::Junior => self.junior,
            Level::Intermediate => self.intermediate,
            Level::Senior => self.senior,
        }
    }
}

/// Origin of a reference salary figure.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReferenceSource {
    /// Market median; the figure gaps are bucketed against.
    Market,
    /// Domestic salary survey.
    Domestic,
    /// International salary survey.
    International,
}

impl ReferenceSource {
    pub const ALL: [ReferenceSource; 3] = [
        ReferenceSource::Market,
        ReferenceSource::Domestic,
        ReferenceSource::International,
    ];
}

/// The three reference tables for one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReferenceSalaries {
    pub market: LevelSalaries,
    pub domestic: LevelSalaries,
    pub international: LevelSalaries,
}

impl ReferenceSalaries {
    pub fn new(market: LevelSalaries, domestic: LevelSalaries, international: LevelSalaries) -> Self {
        Self {
            market,
            domestic,
            international,
        }
    }

    pub fn get(&self, source: ReferenceSource) -> &LevelSalaries {
        match source {
            ReferenceSource::Market => &self.market,
            ReferenceSource::Domestic => &self.domestic,
            ReferenceSource::International => &self.international,
        }
    }
}

/// Static benchmark data keyed by position name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BenchmarkTable {
    entries: BTreeMap<String, ReferenceSalaries>,
}

impl BenchmarkTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: impl Into<String>, salaries: ReferenceSalaries) -> Self {
        self.entries.insert(position.into(), salaries);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ReferenceSalaries)> {
        self.entries.iter()
    }
}
