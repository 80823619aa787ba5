//! Employee compensation records, position salary grids and the analytics
//! derived from them: per-group distributions, out-of-range alerts and
//! market benchmarking, in any supported display currency.

pub mod adapters;
pub mod domain;
pub mod seed;

pub use domain::{
    models::{convert, Currency},
    ports::inbound::CompensationService,
    CompensationError, ValidationError,
};
