use thiserror::Error;

use crate::expression::Number;

/// Errors that can occur while reading the puzzle input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("No numbers provided")]
    EmptyNumberList,
    #[error("Invalid number format: '{0}'")]
    InvalidNumber(String),
    #[error("Numbers must be positive, got {0}")]
    NonPositiveNumber(Number),
    #[error("Duplicate numbers are not allowed: {0}")]
    DuplicateNumber(Number),
    #[error("Too many numbers: {count} given, at most {max} allowed")]
    TooManyNumbers { count: usize, max: usize },
    #[error("Invalid target number format: '{0}'")]
    InvalidTarget(String),
    #[error("Target must be between {min} and {max}, got {target}")]
    TargetOutOfRange {
        target: Number,
        min: Number,
        max: Number,
    },
}
