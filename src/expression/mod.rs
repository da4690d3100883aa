//! Expression trees over the four Countdown operators

mod ast;
mod display;
mod errors;
mod eval;
mod operator;

pub use ast::{Expression, Number};
pub use errors::ExpressionError;
pub use operator::Operator;
