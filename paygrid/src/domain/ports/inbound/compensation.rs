use time::Date;

use crate::domain::{
    analysis::{Aggregation, EmployeeDetail, PositionSummary, RangeAlert},
    benchmark::BenchmarkComparison,
    models::{
        Currency, Employee, EmployeeDraft, EmployeeFilter, EmployeeId, HistoryEntry, Level,
        Position, PositionDraft, PositionId, RangeBound,
    },
    CompensationError, DerivedViews,
};

/// Inbound port for the compensation tool.
///
/// This is the whole surface the presentation layer talks to. Reads always
/// recompute their views from the current records; nothing derived is kept
/// between calls. Confirmation before deletes is the caller's concern.
pub trait CompensationService: Send + Sync + 'static {
    // ========================================================================
    // Employees
    // ========================================================================

    /// Add an employee with a fresh id and a single "Hire" history entry.
    ///
    /// An empty department is filled in from the referenced position.
    fn add_employee(&self, draft: EmployeeDraft) -> Result<EmployeeId, CompensationError>;

    /// Replace an employee's fields, keeping their id and history.
    ///
    /// No history entry is appended; use [`Self::record_history_entry`] for
    /// that. Unknown ids are ignored.
    fn update_employee(&self, id: EmployeeId, draft: EmployeeDraft)
        -> Result<(), CompensationError>;

    /// Append an entry to an employee's history. Unknown ids are ignored.
    fn record_history_entry(&self, id: EmployeeId, entry: HistoryEntry);

    /// Remove an employee. Unknown ids are ignored.
    fn delete_employee(&self, id: EmployeeId);

    fn get_employee(&self, id: EmployeeId) -> Option<Employee>;

    /// Employees matching `filter`, in insertion order.
    fn list_employees(&self, filter: &EmployeeFilter) -> Vec<Employee>;

    // ========================================================================
    // Positions
    // ========================================================================

    fn add_position(&self, draft: PositionDraft) -> Result<PositionId, CompensationError>;

    /// Set one bound of one salary band, given in the base currency.
    fn update_salary_range_cell(
        &self,
        position_id: PositionId,
        level: Level,
        bound: RangeBound,
        value: u64,
    );

    /// Set one bound of one salary band from a value typed in `currency`.
    fn update_salary_range_cell_in(
        &self,
        position_id: PositionId,
        level: Level,
        bound: RangeBound,
        value: u64,
        currency: Currency,
    );

    /// Remove a position. Employees referencing it keep the dangling name.
    fn delete_position(&self, id: PositionId);

    fn get_position(&self, id: PositionId) -> Option<Position>;

    fn list_positions(&self) -> Vec<Position>;

    /// Distinct position departments, for filtering.
    fn departments(&self) -> Vec<String>;

    // ========================================================================
    // Derived views
    // ========================================================================

    fn aggregated_stats(&self, currency: Currency) -> Aggregation;

    fn benchmark_comparison(&self, currency: Currency) -> BenchmarkComparison;

    fn range_alerts(&self, currency: Currency) -> Vec<RangeAlert>;

    /// Aggregation, benchmark and alerts computed from one snapshot.
    fn derive_views(&self, currency: Currency) -> DerivedViews;

    fn position_summary(&self, id: PositionId, currency: Currency) -> Option<PositionSummary>;

    fn employee_detail(
        &self,
        id: EmployeeId,
        currency: Currency,
        today: Date,
    ) -> Option<EmployeeDetail>;

    fn convert_currency(&self, amount: u64, from: Currency, to: Currency) -> u64;
}
