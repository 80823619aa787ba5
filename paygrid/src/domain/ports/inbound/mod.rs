mod compensation;

pub use compensation::*;
