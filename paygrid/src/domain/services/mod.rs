mod compensation;

pub use compensation::CompensationServiceImpl;
