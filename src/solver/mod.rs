mod config;
mod core;
mod errors;
mod results;

pub use config::SolverConfig;
pub use core::CountdownSolver;
pub use errors::SolverError;
pub use results::{Candidate, combine, results, split};
