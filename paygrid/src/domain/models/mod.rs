mod currency;
mod employee;
mod filter;
mod ids;
mod level;
mod position;

pub use currency::*;
pub use employee::*;
pub use filter::*;
pub use ids::*;
pub use level::*;
pub use position::*;
