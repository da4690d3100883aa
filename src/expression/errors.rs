use thiserror::Error;

use crate::expression::ast::Number;
use crate::expression::operator::Operator;

/// Reasons an expression has no value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Value {0} is not a positive number")]
    NonPositiveValue(Number),
    #[error("Operator {op} is not valid for {left} and {right}")]
    InvalidOperation {
        op: Operator,
        left: Number,
        right: Number,
    },
}
