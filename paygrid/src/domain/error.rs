use thiserror::Error;

/// Reasons a draft record is rejected before any mutation happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("first name is required")]
    MissingFirstName,
    #[error("last name is required")]
    MissingLastName,
    #[error("position is required")]
    MissingPosition,
    #[error("salary is required")]
    MissingSalary,
    #[error("start date is required")]
    MissingStartDate,
    #[error("position name is required")]
    MissingPositionName,
}

/// Errors surfaced by compensation operations.
///
/// Operations addressed to unknown records are no-ops rather than errors, so
/// validation is the only rejection a caller has to handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompensationError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
