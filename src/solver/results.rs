use crate::expression::{Expression, Number, Operator};

/// An expression paired with the value it evaluates to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub expression: Expression,
    pub value: Number,
}

impl Candidate {
    fn leaf(n: Number) -> Self {
        Self {
            expression: Expression::Value(n),
            value: n,
        }
    }
}

/// Every way of cutting `ns` into two non-empty contiguous halves.
pub fn split(ns: &[Number]) -> impl Iterator<Item = (&[Number], &[Number])> {
    (1..ns.len()).map(move |i| ns.split_at(i))
}

/// Applications of each operator that accepts the two candidate values.
pub fn combine(left: &Candidate, right: &Candidate) -> impl Iterator<Item = Candidate> {
    let (x, y) = (left.value, right.value);
    Operator::ALL
        .into_iter()
        .filter(move |op| op.valid(x, y))
        .map(move |op| Candidate {
            expression: Expression::apply(op, left.expression.clone(), right.expression.clone()),
            value: op.apply(x, y),
        })
}

/// Every valid expression over `ns` that keeps its numbers in the given
/// order, together with its value.
///
/// Operator validity is checked before each node is built, so rejected
/// branches are never expanded.
pub fn results(ns: &[Number]) -> Vec<Candidate> {
    match ns {
        [] => Vec::new(),
        [n] if *n > 0 => vec![Candidate::leaf(*n)],
        [_] => Vec::new(),
        _ => {
            let mut out = Vec::new();
            for (ls, rs) in split(ns) {
                let lefts = results(ls);
                if lefts.is_empty() {
                    continue;
                }
                let rights = results(rs);
                for lx in &lefts {
                    for ry in &rights {
                        out.extend(combine(lx, ry));
                    }
                }
            }
            out
        }
    }
}
