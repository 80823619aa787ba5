mod employee_repository;
mod position_repository;

pub use employee_repository::*;
pub use position_repository::*;
