//! Derived salary analytics: per-group distributions, band alerts and
//! per-position summaries. Everything here is recomputed from the record
//! snapshots on each call.

mod aggregate;
mod alerts;
mod summary;

pub use aggregate::*;
pub use alerts::*;
pub use summary::*;
