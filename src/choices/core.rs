use log::{debug, info};

use crate::choices::permutations::distinct_perms;
use crate::choices::subsets::Subsets;
use crate::expression::Number;

/// Lazy sequence of every ordering of every non-empty sub-multiset.
///
/// Only the orderings of the current subset are held in memory.
#[derive(Debug, Clone)]
pub struct Choices {
    subsets: Subsets,
    pending: std::vec::IntoIter<Vec<Number>>,
}

impl Choices {
    pub fn new(numbers: &[Number]) -> Self {
        info!(
            "Choosing ordered selections from {} numbers",
            numbers.len()
        );
        Self {
            subsets: Subsets::new(numbers),
            pending: Vec::new().into_iter(),
        }
    }
}

impl Iterator for Choices {
    type Item = Vec<Number>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(seq) = self.pending.next() {
                return Some(seq);
            }
            let subset = self.subsets.next()?;
            debug!("Expanding orderings of {:?}", subset);
            self.pending = distinct_perms(&subset).into_iter();
        }
    }
}

pub fn choices(numbers: &[Number]) -> Choices {
    Choices::new(numbers)
}

/// Number of sequences [`choices`] yields for `n` distinct numbers:
/// the sum over `k` of `n! / (n - k)!`.
pub fn choice_count(n: usize) -> usize {
    (1..=n)
        .map(|k| ((n - k + 1)..=n).product::<usize>())
        .sum()
}
