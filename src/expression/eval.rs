use log::debug;

use crate::expression::ast::{Expression, Number};
use crate::expression::errors::ExpressionError;

impl Expression {
    /// # Errors
    ///
    /// Returns an error when the expression is not computable:
    /// - a leaf holds a number that is not positive
    /// - an operator is applied to operand values it does not accept
    pub fn evaluate(&self) -> Result<Number, ExpressionError> {
        match self {
            Expression::Value(n) => {
                if *n > 0 {
                    Ok(*n)
                } else {
                    debug!("Rejecting non-positive leaf {}", n);
                    Err(ExpressionError::NonPositiveValue(*n))
                }
            }
            Expression::Application(op, l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if op.valid(left, right) {
                    Ok(op.apply(left, right))
                } else {
                    debug!(
                        "Operator {} rejected operands {} and {}",
                        op.symbol(),
                        left,
                        right
                    );
                    Err(ExpressionError::InvalidOperation {
                        op: *op,
                        left,
                        right,
                    })
                }
            }
        }
    }

    pub fn is_computable(&self) -> bool {
        self.evaluate().is_ok()
    }
}
