use std::fmt;

use crate::expression::ast::Expression;
use crate::expression::operator::Operator;

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Leaves are written bare, applications nested inside another are bracketed.
        fn write_operand(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            if expr.is_value() {
                fmt_expression(f, expr)
            } else {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Value(n) => write!(f, "{}", n),
                Expression::Application(op, l, r) => {
                    write_operand(f, l)?;
                    write!(f, "{}", op)?;
                    write_operand(f, r)
                }
            }
        }

        fmt_expression(f, self)
    }
}
