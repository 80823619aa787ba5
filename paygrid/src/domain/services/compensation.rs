use std::sync::Arc;

use time::Date;
use tracing::instrument;

use crate::domain::{
    analysis::{
        self, find_position, Aggregation, EmployeeDetail, PositionSummary, RangeAlert,
    },
    benchmark::{self, BenchmarkComparison, BenchmarkTable},
    derive_views,
    models::{
        convert, Currency, Employee, EmployeeDraft, EmployeeFilter, EmployeeId, HistoryEntry,
        Level, Position, PositionDraft, PositionId, RangeBound,
    },
    ports::{
        inbound::CompensationService,
        outbound::{EmployeeRepository, PositionRepository},
    },
    CompensationError, DerivedViews,
};

/// Implementation of the CompensationService inbound port.
///
/// Holds the two record collections behind their outbound ports plus the
/// static benchmark table. Employees and positions are linked only by
/// position name, resolved on every read.
pub struct CompensationServiceImpl<E, P> {
    employees: Arc<E>,
    positions: Arc<P>,
    benchmarks: BenchmarkTable,
}

impl<E, P> CompensationServiceImpl<E, P> {
    pub fn new(employees: Arc<E>, positions: Arc<P>) -> Self {
        Self {
            employees,
            positions,
            benchmarks: BenchmarkTable::default(),
        }
    }

    pub fn with_benchmarks(mut self, benchmarks: BenchmarkTable) -> Self {
        self.benchmarks = benchmarks;
        self
    }
}

impl<E: EmployeeRepository, P: PositionRepository> CompensationServiceImpl<E, P> {
    /// Department from the position currently carrying `position_name`.
    fn department_of(&self, position_name: &str) -> Option<String> {
        let positions = self.positions.list();
        find_position(&positions, position_name).map(|position| position.department.clone())
    }
}

/// Keeps a non-blank department, dropping empty input.
fn non_blank(department: Option<String>) -> Option<String> {
    department.filter(|department| !department.trim().is_empty())
}

impl<E: EmployeeRepository, P: PositionRepository> CompensationService
    for CompensationServiceImpl<E, P>
{
    #[instrument(skip(self, draft), fields(position = %draft.position))]
    fn add_employee(&self, draft: EmployeeDraft) -> Result<EmployeeId, CompensationError> {
        let start_date = draft.validate()?;

        let department = non_blank(draft.department.clone())
            .or_else(|| self.department_of(&draft.position))
            .unwrap_or_default();
        let history = vec![HistoryEntry::hire(start_date, draft.salary, draft.bonus)];

        let id = self.employees.next_id();
        self.employees
            .insert(draft.into_employee(id, start_date, department, history));

        tracing::info!(employee_id = %id, "employee added");
        Ok(id)
    }

    #[instrument(skip(self, draft))]
    fn update_employee(
        &self,
        id: EmployeeId,
        draft: EmployeeDraft,
    ) -> Result<(), CompensationError> {
        let start_date = draft.validate()?;

        // Resolved before taking the write lock on employees.
        let draft_department = non_blank(draft.department.clone());
        let looked_up = self.department_of(&draft.position);

        // Edits never append to the history; callers record entries explicitly.
        let updated = self.employees.update(id, |employee| {
            let department = draft_department
                .or_else(|| non_blank(Some(std::mem::take(&mut employee.department))))
                .or(looked_up)
                .unwrap_or_default();
            let history = std::mem::take(&mut employee.history);
            *employee = draft.into_employee(id, start_date, department, history);
        });

        if updated {
            tracing::info!(employee_id = %id, "employee updated");
        } else {
            tracing::warn!(employee_id = %id, "update ignored: unknown employee");
        }
        Ok(())
    }

    #[instrument(skip(self, entry), fields(reason = %entry.reason))]
    fn record_history_entry(&self, id: EmployeeId, entry: HistoryEntry) {
        if self.employees.update(id, |employee| employee.history.push(entry)) {
            tracing::info!(employee_id = %id, "history entry recorded");
        } else {
            tracing::warn!(employee_id = %id, "history entry ignored: unknown employee");
        }
    }

    #[instrument(skip(self))]
    fn delete_employee(&self, id: EmployeeId) {
        if self.employees.remove(id) {
            tracing::info!(employee_id = %id, "employee deleted");
        } else {
            tracing::warn!(employee_id = %id, "delete ignored: unknown employee");
        }
    }

    fn get_employee(&self, id: EmployeeId) -> Option<Employee> {
        self.employees.get(id)
    }

    fn list_employees(&self, filter: &EmployeeFilter) -> Vec<Employee> {
        let positions = self.positions.list();
        let employees = self.employees.list();
        filter
            .apply(&employees, &positions)
            .into_iter()
            .cloned()
            .collect()
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    fn add_position(&self, draft: PositionDraft) -> Result<PositionId, CompensationError> {
        draft.validate()?;

        let id = self.positions.next_id();
        self.positions.insert(draft.into_position(id));

        tracing::info!(position_id = %id, "position added");
        Ok(id)
    }

    #[instrument(skip(self))]
    fn update_salary_range_cell(
        &self,
        position_id: PositionId,
        level: Level,
        bound: RangeBound,
        value: u64,
    ) {
        let updated = self.positions.update(position_id, |position| {
            position.set_range_bound(level, bound, value)
        });
        if updated {
            tracing::info!(%position_id, %level, %bound, value, "salary range updated");
        } else {
            tracing::warn!(%position_id, "range update ignored: unknown position");
        }
    }

    fn update_salary_range_cell_in(
        &self,
        position_id: PositionId,
        level: Level,
        bound: RangeBound,
        value: u64,
        currency: Currency,
    ) {
        let value = convert(value, currency, Currency::BASE);
        self.update_salary_range_cell(position_id, level, bound, value);
    }

    #[instrument(skip(self))]
    fn delete_position(&self, id: PositionId) {
        if self.positions.remove(id) {
            tracing::info!(position_id = %id, "position deleted");
        } else {
            tracing::warn!(position_id = %id, "delete ignored: unknown position");
        }
    }

    fn get_position(&self, id: PositionId) -> Option<Position> {
        self.positions.get(id)
    }

    fn list_positions(&self) -> Vec<Position> {
        self.positions.list()
    }

    fn departments(&self) -> Vec<String> {
        analysis::departments(&self.positions.list())
    }

    fn aggregated_stats(&self, currency: Currency) -> Aggregation {
        analysis::aggregate(&self.employees.list(), &self.positions.list(), currency)
    }

    fn benchmark_comparison(&self, currency: Currency) -> BenchmarkComparison {
        benchmark::compare(&self.aggregated_stats(currency), &self.benchmarks, currency)
    }

    fn range_alerts(&self, currency: Currency) -> Vec<RangeAlert> {
        analysis::range_alerts(&self.employees.list(), &self.positions.list(), currency)
    }

    fn derive_views(&self, currency: Currency) -> DerivedViews {
        derive_views(
            &self.employees.list(),
            &self.positions.list(),
            &self.benchmarks,
            currency,
        )
    }

    fn position_summary(&self, id: PositionId, currency: Currency) -> Option<PositionSummary> {
        let position = self.positions.get(id)?;
        Some(analysis::position_summary(
            &position,
            &self.employees.list(),
            currency,
        ))
    }

    fn employee_detail(
        &self,
        id: EmployeeId,
        currency: Currency,
        today: Date,
    ) -> Option<EmployeeDetail> {
        let employee = self.employees.get(id)?;
        Some(analysis::employee_detail(
            &employee,
            &self.positions.list(),
            currency,
            today,
        ))
    }

    fn convert_currency(&self, amount: u64, from: Currency, to: Currency) -> u64 {
        convert(amount, from, to)
    }
}
