use std::collections::HashSet;

use log::{debug, warn};

use crate::expression::Number;
use crate::utils::constants::{MAX_NUMBERS, MAX_TARGET, MIN_TARGET};
use crate::utils::errors::InputError;

/// Parse a comma-separated list such as `"1,3,7,10,25,50"`.
///
/// Entries are trimmed and empty entries are skipped.
///
/// # Errors
///
/// Returns an error if an entry is not an integer or the resulting list
/// fails [`validate_numbers`].
pub fn parse_numbers(input: &str) -> Result<Vec<Number>, InputError> {
    debug!("Parsing number list: '{}'", input);

    let numbers = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Number>().map_err(|_| {
                warn!("Entry '{}' is not an integer", s);
                InputError::InvalidNumber(s.to_string())
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    validate_numbers(&numbers)?;
    Ok(numbers)
}

/// # Errors
///
/// Returns an error if the list is empty, holds a number that is not
/// positive, repeats a number, or is longer than [`MAX_NUMBERS`].
pub fn validate_numbers(numbers: &[Number]) -> Result<(), InputError> {
    if numbers.is_empty() {
        warn!("Number list is empty");
        return Err(InputError::EmptyNumberList);
    }

    if let Some(&n) = numbers.iter().find(|n| **n <= 0) {
        warn!("Number list contains non-positive value {}", n);
        return Err(InputError::NonPositiveNumber(n));
    }

    let mut seen = HashSet::with_capacity(numbers.len());
    if let Some(&n) = numbers.iter().find(|n| !seen.insert(**n)) {
        warn!("Number list repeats {}", n);
        return Err(InputError::DuplicateNumber(n));
    }

    if numbers.len() > MAX_NUMBERS {
        warn!("Number list has {} entries", numbers.len());
        return Err(InputError::TooManyNumbers {
            count: numbers.len(),
            max: MAX_NUMBERS,
        });
    }

    debug!("Number list validation successful");
    Ok(())
}

/// # Errors
///
/// Returns an error if the input is not an integer or is outside
/// [`MIN_TARGET`]..=[`MAX_TARGET`].
pub fn parse_target(input: &str) -> Result<Number, InputError> {
    let trimmed = input.trim();
    let target = trimmed
        .parse::<Number>()
        .map_err(|_| InputError::InvalidTarget(trimmed.to_string()))?;
    validate_target(target)?;
    Ok(target)
}

/// # Errors
///
/// Returns an error if the target is outside [`MIN_TARGET`]..=[`MAX_TARGET`].
pub fn validate_target(target: Number) -> Result<(), InputError> {
    if (MIN_TARGET..=MAX_TARGET).contains(&target) {
        Ok(())
    } else {
        warn!("Target {} is out of range", target);
        Err(InputError::TargetOutOfRange {
            target,
            min: MIN_TARGET,
            max: MAX_TARGET,
        })
    }
}
