use log::{debug, warn};

use crate::choices::constants::MAX_MASK_WIDTH;
use crate::expression::Number;

/// Lazy walk over the non-empty sub-multisets of the input.
///
/// Subsets are visited in increasing bitmask order over input positions.
/// When the input repeats a value, only the selection that takes the
/// leftmost copies is visited, so each sub-multiset appears once.
#[derive(Debug, Clone)]
pub struct Subsets {
    numbers: Vec<Number>,
    next_mask: u64,
    end_mask: u64,
}

impl Subsets {
    pub fn new(numbers: &[Number]) -> Self {
        let width = if numbers.len() > MAX_MASK_WIDTH {
            warn!(
                "Only the first {} of {} numbers can be selected from",
                MAX_MASK_WIDTH,
                numbers.len()
            );
            MAX_MASK_WIDTH
        } else {
            numbers.len()
        };

        let numbers = numbers.iter().take(width).copied().collect::<Vec<_>>();
        debug!("Enumerating subsets of {:?}", numbers);

        Self {
            numbers,
            next_mask: 1,
            end_mask: 1u64 << width,
        }
    }

    fn is_canonical(&self, mask: u64) -> bool {
        self.numbers.iter().enumerate().all(|(i, n)| {
            mask & (1 << i) == 0
                || self
                    .numbers
                    .iter()
                    .take(i)
                    .enumerate()
                    .all(|(j, m)| m != n || mask & (1 << j) != 0)
        })
    }

    fn select(&self, mask: u64) -> Vec<Number> {
        self.numbers
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, n)| *n)
            .collect()
    }
}

impl Iterator for Subsets {
    type Item = Vec<Number>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_mask < self.end_mask {
            let mask = self.next_mask;
            self.next_mask += 1;
            if self.is_canonical(mask) {
                return Some(self.select(mask));
            }
        }
        None
    }
}

/// Every non-empty sub-multiset of `numbers`, in input order.
pub fn subsequences(numbers: &[Number]) -> Vec<Vec<Number>> {
    Subsets::new(numbers).collect()
}
