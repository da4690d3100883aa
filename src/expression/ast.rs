use crate::expression::operator::Operator;

/// Integer type used for source numbers and every intermediate value
pub type Number = i64;

/// An arithmetic expression built bottom-up from source numbers.
///
/// Children are owned by their parent, so a tree never shares subtrees and
/// never changes once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Value(Number),
    Application(Operator, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn value(n: Number) -> Self {
        Expression::Value(n)
    }

    pub fn apply(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::Application(op, Box::new(left), Box::new(right))
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Expression::Value(_))
    }

    /// Source numbers used by this expression, left to right
    pub fn values(&self) -> Vec<Number> {
        let mut out = Vec::new();
        collect_values(self, &mut out);
        out
    }
}

fn collect_values(expr: &Expression, out: &mut Vec<Number>) {
    match expr {
        Expression::Value(n) => out.push(*n),
        Expression::Application(_, l, r) => {
            collect_values(l, out);
            collect_values(r, out);
        }
    }
}
