//! Countdown - A library for solving the Countdown numbers game
//!
//! This library enumerates every arithmetic expression that can be built from a
//! small set of source numbers with `+`, `-`, `*` and exact `/`, using each
//! number at most once, and keeps the ones that hit a target value.

pub mod analytics;
pub mod choices;
pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use analytics::{SolutionAnalysis, SolutionStats};
pub use expression::{Expression, ExpressionError, Number, Operator};
pub use solver::{CountdownSolver, SolverConfig, SolverError};
pub use utils::{InputError, validate_numbers, validate_target};

/// Find every expression over `numbers` that evaluates to `target`
///
/// This is a convenience function that validates the input and runs a default
/// solver to completion.
///
/// # Arguments
///
/// * `numbers` - Distinct positive source numbers, at most six of them
/// * `target` - The target value, between 1 and 999
///
/// # Returns
///
/// * `Ok(solutions)` - Every matching expression, possibly none
/// * `Err(SolverError)` - If the input is rejected
///
/// # Errors
///
/// This function will return an error if:
/// * The number list is empty, repeats a number, or holds more than six numbers
/// * A number is not positive
/// * The target is outside 1..=999
///
/// # Examples
///
/// ```
/// use countdown::solutions;
///
/// match solutions(&[1, 3, 7, 10, 25, 50], 765) {
///     Ok(found) if found.is_empty() => println!("no solutions"),
///     Ok(found) => println!("First: {}", found[0]),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solutions(numbers: &[Number], target: Number) -> Result<Vec<Expression>, SolverError> {
    validate_numbers(numbers)?;
    validate_target(target)?;

    let solver = CountdownSolver::default();
    Ok(solver.find_all(numbers, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solutions_rejects_bad_input() {
        assert!(matches!(
            solutions(&[], 10),
            Err(SolverError::InputError(InputError::EmptyNumberList))
        ));
        assert!(matches!(
            solutions(&[2, 2], 4),
            Err(SolverError::InputError(InputError::DuplicateNumber(2)))
        ));
        assert!(matches!(
            solutions(&[2, 3], 1000),
            Err(SolverError::InputError(InputError::TargetOutOfRange { .. }))
        ));
    }

    #[test]
    fn test_solutions_every_answer_hits_target() {
        let found = solutions(&[1, 3, 7, 10, 25, 50], 765);
        assert!(found.is_ok());
        if let Ok(found) = found {
            assert!(!found.is_empty());
            assert!(found.iter().all(|e| e.evaluate() == Ok(765)));
        }
    }

    #[test]
    fn test_solver_error_wraps_input_error() {
        let err = SolverError::from(InputError::EmptyNumberList);
        assert_eq!(err.to_string(), "Input error: No numbers provided");
    }

    #[test]
    fn test_no_solutions_is_not_an_error() {
        assert!(matches!(solutions(&[2, 4], 999), Ok(found) if found.is_empty()));
    }
}
