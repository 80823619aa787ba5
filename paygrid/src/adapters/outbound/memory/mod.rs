//! In-memory record store. The session owns all data; nothing is persisted.

mod employees;
mod positions;

pub use employees::InMemoryEmployeeRepository;
pub use positions::InMemoryPositionRepository;

use std::sync::atomic::{AtomicI64, Ordering};

/// Monotonic id source. Never goes backwards, so deleted ids are not reused.
#[derive(Debug)]
pub(crate) struct IdSequence(AtomicI64);

impl IdSequence {
    pub(crate) fn starting_after(last: i64) -> Self {
        Self(AtomicI64::new(last))
    }

    pub(crate) fn next(&self) -> i64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_after(0)
    }
}
