use serde::Serialize;

use super::{
    analysis::{aggregate, range_alerts, Aggregation, RangeAlert},
    benchmark::{compare, BenchmarkComparison, BenchmarkTable},
    models::{Currency, Employee, Position},
};

/// Every derived view for one display currency, computed from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedViews {
    pub currency: Currency,
    pub aggregation: Aggregation,
    pub benchmark: BenchmarkComparison,
    pub alerts: Vec<RangeAlert>,
}

impl DerivedViews {
    pub fn all_within_range(&self) -> bool {
        self.alerts.is_empty()
    }
}

/// Recomputes all views from scratch.
///
/// Called after every mutation and every display currency change, so no
/// derived figure can outlive the records it was computed from.
pub fn derive_views(
    employees: &[Employee],
    positions: &[Position],
    benchmarks: &BenchmarkTable,
    currency: Currency,
) -> DerivedViews {
    let aggregation = aggregate(employees, positions, currency);
    let benchmark = compare(&aggregation, benchmarks, currency);
    let alerts = range_alerts(employees, positions, currency);

    tracing::debug!(
        %currency,
        groups = aggregation.len(),
        benchmarked = benchmark.len(),
        alerts = alerts.len(),
        "derived views"
    );

    DerivedViews {
        currency,
        aggregation,
        benchmark,
        alerts,
    }
}
