use std::collections::BTreeSet;
use std::fmt;

use crate::expression::{Expression, Number, Operator};

/// Shape of a single solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionStats {
    pub operation_count: usize,
    pub depth: usize,
    pub operators_used: BTreeSet<Operator>,
    pub smallest_number: Number,
    pub largest_number: Number,
}

impl SolutionStats {
    pub fn new(expr: &Expression) -> Self {
        let mut operators_used = BTreeSet::new();
        let operation_count = count_operations(expr, &mut operators_used);
        let numbers = expr.values();

        Self {
            operation_count,
            depth: depth(expr),
            operators_used,
            smallest_number: numbers.iter().copied().min().unwrap_or(0),
            largest_number: numbers.iter().copied().max().unwrap_or(0),
        }
    }
}

fn count_operations(expr: &Expression, used: &mut BTreeSet<Operator>) -> usize {
    match expr {
        Expression::Value(_) => 0,
        Expression::Application(op, l, r) => {
            used.insert(*op);
            1 + count_operations(l, used) + count_operations(r, used)
        }
    }
}

fn depth(expr: &Expression) -> usize {
    match expr {
        Expression::Value(_) => 0,
        Expression::Application(_, l, r) => 1 + depth(l).max(depth(r)),
    }
}

impl fmt::Display for SolutionStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let operators = self
            .operators_used
            .iter()
            .map(|op| op.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(f, "Solution Statistics:")?;
        writeln!(f, "- Operations: {}", self.operation_count)?;
        writeln!(f, "- Expression Depth: {}", self.depth)?;
        writeln!(f, "- Operators Used: [{}]", operators)?;
        write!(
            f,
            "- Number Range: {} to {}",
            self.smallest_number, self.largest_number
        )
    }
}

pub fn analyze_solutions(solutions: &[Expression]) -> Vec<SolutionStats> {
    solutions.iter().map(SolutionStats::new).collect()
}
