use crate::expression::ast::Number;

/// The four binary operators of the numbers game
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Every operator, in the order the builder tries them
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Whether `x op y` is worth building.
    ///
    /// Rejects negative and zero results, inexact division, multiplying or
    /// dividing by one, and the swapped twin of a commutative operation.
    /// Results that would overflow [`Number`] are rejected as well, for any
    /// sign of operand, which keeps [`Operator::apply`] total over every
    /// accepted pair.
    pub fn valid(self, x: Number, y: Number) -> bool {
        match self {
            Operator::Add => x <= y && x.checked_add(y).is_some(),
            Operator::Sub => x > y && x.checked_sub(y).is_some(),
            Operator::Mul => x != 1 && y != 1 && x <= y && x.checked_mul(y).is_some(),
            Operator::Div => y != 1 && x.checked_rem(y) == Some(0) && x.checked_div(y).is_some(),
        }
    }

    /// Apply the operator. Only meaningful when [`Operator::valid`] holds.
    pub fn apply(self, x: Number, y: Number) -> Number {
        match self {
            Operator::Add => x + y,
            Operator::Sub => x - y,
            Operator::Mul => x * y,
            Operator::Div => x / y,
        }
    }
}
