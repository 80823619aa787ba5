//! Market benchmarking of group averages against static reference tables.

mod compare;
mod reference;

pub use compare::*;
pub use reference::*;
