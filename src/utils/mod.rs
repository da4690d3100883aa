//! Input parsing and validation

pub mod constants;
mod errors;
mod validation;

pub use errors::InputError;
pub use validation::{parse_numbers, parse_target, validate_numbers, validate_target};

#[cfg(test)]
mod tests;
