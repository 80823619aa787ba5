pub mod analysis;
pub mod benchmark;
pub mod models;
pub mod ports;
pub mod services;

mod error;
mod seniority;
mod views;

pub use error::*;
pub use seniority::*;
pub use views::*;
