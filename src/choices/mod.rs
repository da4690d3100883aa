//! Ordered selections of the source numbers

pub mod constants;
mod core;
mod permutations;
mod subsets;

pub use core::{Choices, choice_count, choices};
pub use permutations::{interleave, perms};
pub use subsets::{Subsets, subsequences};

#[cfg(test)]
mod tests;
