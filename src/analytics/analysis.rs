use std::collections::BTreeMap;
use std::fmt;

use log::debug;

use crate::analytics::stats::SolutionStats;
use crate::expression::{Expression, Operator};

/// Aggregate figures over a whole solution set
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionAnalysis {
    pub total_solutions: usize,
    pub average_depth: f64,
    pub max_depth: usize,
    pub average_operations: f64,
    pub max_operations: usize,
    /// Application nodes per operator, summed over every solution
    pub operator_usage: BTreeMap<Operator, usize>,
}

impl SolutionAnalysis {
    pub fn new(solutions: &[Expression]) -> Self {
        let mut operator_usage = BTreeMap::new();
        let mut total_depth = 0usize;
        let mut total_operations = 0usize;
        let mut max_depth = 0usize;
        let mut max_operations = 0usize;

        for expr in solutions {
            let stats = SolutionStats::new(expr);
            total_depth += stats.depth;
            total_operations += stats.operation_count;
            max_depth = max_depth.max(stats.depth);
            max_operations = max_operations.max(stats.operation_count);
            tally_operators(expr, &mut operator_usage);
        }

        let (average_depth, average_operations) = if solutions.is_empty() {
            (0.0, 0.0)
        } else {
            let n = solutions.len() as f64;
            (total_depth as f64 / n, total_operations as f64 / n)
        };

        debug!(
            "Analysed {} solutions, operator usage {:?}",
            solutions.len(),
            operator_usage
        );

        Self {
            total_solutions: solutions.len(),
            average_depth,
            max_depth,
            average_operations,
            max_operations,
            operator_usage,
        }
    }
}

fn tally_operators(expr: &Expression, usage: &mut BTreeMap<Operator, usize>) {
    if let Expression::Application(op, l, r) = expr {
        *usage.entry(*op).or_insert(0) += 1;
        tally_operators(l, usage);
        tally_operators(r, usage);
    }
}

impl fmt::Display for SolutionAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Expression Analysis:")?;
        writeln!(f, "- Total Solutions: {}", self.total_solutions)?;
        writeln!(f, "- Average Depth: {:.2}", self.average_depth)?;
        writeln!(f, "- Max Depth: {}", self.max_depth)?;
        writeln!(f, "- Average Operations: {:.2}", self.average_operations)?;
        writeln!(f, "- Max Operations: {}", self.max_operations)?;
        write!(f, "Operator Usage:")?;
        for (op, count) in &self.operator_usage {
            write!(f, "\n  {}: {} uses", op, count)?;
        }
        Ok(())
    }
}
