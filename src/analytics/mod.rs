//! Statistics over a finished solution set

mod analysis;
mod stats;

pub use analysis::SolutionAnalysis;
pub use stats::{SolutionStats, analyze_solutions};
