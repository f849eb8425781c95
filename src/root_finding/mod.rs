// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub(crate) mod signs;

// algorithms
pub mod bisection;
pub mod fixed_point;

pub use bisection::bisection;
pub use fixed_point::fixed_point;
