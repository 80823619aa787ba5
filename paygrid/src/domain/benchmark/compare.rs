use std::collections::BTreeMap;

use serde::Serialize;
use strum::Display;

use super::{BenchmarkTable, ReferenceSalaries, ReferenceSource};
use crate::domain::{
    analysis::{Aggregation, GroupKey},
    models::{convert, Currency, Level},
};

/// Bucket for a position's average market gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Standing {
    /// Average gap at or above zero.
    Competitive,
    /// Average gap in `[-5, 0)`.
    Watch,
    /// Average gap below -5.
    ActionRequired,
}

impl Standing {
    pub fn from_average_gap(average_gap: f64) -> Self {
        if average_gap >= 0.0 {
            Standing::Competitive
        } else if average_gap >= -5.0 {
            Standing::Watch
        } else {
            Standing::ActionRequired
        }
    }
}

/// Tone of a single level gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GapBand {
    /// More than 5% above the reference.
    Above,
    Aligned,
    /// More than 5% below the reference.
    Below,
}

impl GapBand {
    pub fn from_gap(gap: f64) -> Self {
        if gap > 5.0 {
            GapBand::Above
        } else if gap < -5.0 {
            GapBand::Below
        } else {
            GapBand::Aligned
        }
    }
}

/// Percentage gap of `average` against `reference`.
///
/// Not applicable (`None`) when either figure is zero: a zero reference would
/// divide by zero and a zero average means there is nobody to compare.
pub fn gap_pct(average: u64, reference: u64) -> Option<f64> {
    if average == 0 || reference == 0 {
        return None;
    }
    Some((average as f64 - reference as f64) / reference as f64 * 100.0)
}

/// Formats a gap as `+6.7%`, or `n/a`.
pub fn format_gap(gap: Option<f64>) -> String {
    match gap {
        Some(gap) => format!("{gap:+.1}%"),
        None => "n/a".to_string(),
    }
}

/// A reference figure converted into the display currency, and our gap to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceComparison {
    pub source: ReferenceSource,
    pub reference: u64,
    pub gap_pct: Option<f64>,
}

/// Benchmark row for one level of a position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelComparison {
    pub level: Level,
    /// Group average from the aggregation, `None` without employees.
    pub your_average: Option<u64>,
    /// Market, domestic and international figures, in that order.
    pub references: Vec<ReferenceComparison>,
    /// Gap against the market reference.
    pub gap_pct: Option<f64>,
    pub band: Option<GapBand>,
}

/// Benchmark result for one position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionBenchmark {
    pub position: String,
    pub levels: Vec<LevelComparison>,
    /// Mean market gap over all three levels. Levels without a gap count as 0.
    pub average_gap: f64,
    pub standing: Standing,
}

/// Benchmark results keyed by position name.
pub type BenchmarkComparison = BTreeMap<String, PositionBenchmark>;

fn compare_level(
    position: &str,
    level: Level,
    salaries: &ReferenceSalaries,
    aggregation: &Aggregation,
    currency: Currency,
) -> LevelComparison {
    let your_average = aggregation
        .get(&GroupKey::new(position, level))
        .map(|stats| stats.average);

    let references: Vec<ReferenceComparison> = ReferenceSource::ALL
        .into_iter()
        .map(|source| {
            let reference = convert(salaries.get(source).get(level), Currency::BASE, currency);
            ReferenceComparison {
                source,
                reference,
                gap_pct: your_average.and_then(|average| gap_pct(average, reference)),
            }
        })
        .collect();

    let gap = references
        .iter()
        .find(|comparison| comparison.source == ReferenceSource::Market)
        .and_then(|comparison| comparison.gap_pct);

    LevelComparison {
        level,
        your_average,
        references,
        gap_pct: gap,
        band: gap.map(GapBand::from_gap),
    }
}

/// Compares group averages against the reference tables.
///
/// Every position in `table` gets a row, whether or not anyone holds it.
/// Reference figures are converted into `currency` so they are comparable
/// with the aggregation, which must have been computed in the same currency.
pub fn compare(
    aggregation: &Aggregation,
    table: &BenchmarkTable,
    currency: Currency,
) -> BenchmarkComparison {
    table
        .iter()
        .map(|(position, salaries)| {
            let levels: Vec<LevelComparison> = Level::ALL
                .into_iter()
                .map(|level| compare_level(position, level, salaries, aggregation, currency))
                .collect();
            let average_gap = levels
                .iter()
                .map(|level| level.gap_pct.unwrap_or(0.0))
                .sum::<f64>()
                / Level::ALL.len() as f64;

            let benchmark = PositionBenchmark {
                position: position.clone(),
                levels,
                average_gap,
                standing: Standing::from_average_gap(average_gap),
            };
            (position.clone(), benchmark)
        })
        .collect()
}
