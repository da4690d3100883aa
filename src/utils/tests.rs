use crate::utils::constants::{MAX_NUMBERS, MAX_TARGET, MIN_TARGET};
use crate::utils::{InputError, parse_numbers, parse_target, validate_numbers, validate_target};

#[test]
fn test_parse_numbers_valid() {
    assert_eq!(parse_numbers("1,3,7,10,25,50"), Ok(vec![1, 3, 7, 10, 25, 50]));
    assert_eq!(parse_numbers("5"), Ok(vec![5]));
}

#[test]
fn test_parse_numbers_trims_and_skips_empty() {
    assert_eq!(parse_numbers(" 2, 3 ,,4, "), Ok(vec![2, 3, 4]));
}

#[test]
fn test_parse_numbers_rejects_non_numeric() {
    assert_eq!(
        parse_numbers("a,b"),
        Err(InputError::InvalidNumber("a".to_string()))
    );
    assert!(parse_numbers("1,2.5").is_err());
}

#[test]
fn test_parse_numbers_rejects_empty() {
    assert_eq!(parse_numbers(""), Err(InputError::EmptyNumberList));
    assert_eq!(parse_numbers(" , ,"), Err(InputError::EmptyNumberList));
}

#[test]
fn test_validate_numbers_rejects_duplicates() {
    assert_eq!(
        validate_numbers(&[1, 2, 2]),
        Err(InputError::DuplicateNumber(2))
    );
}

#[test]
fn test_validate_numbers_rejects_non_positive() {
    assert_eq!(
        validate_numbers(&[3, 0]),
        Err(InputError::NonPositiveNumber(0))
    );
    assert!(parse_numbers("4,-1").is_err());
}

#[test]
fn test_validate_numbers_rejects_too_many() {
    assert!(validate_numbers(&[1, 2, 3, 4, 5, 6]).is_ok());
    assert_eq!(
        validate_numbers(&[1, 2, 3, 4, 5, 6, 7]),
        Err(InputError::TooManyNumbers {
            count: 7,
            max: MAX_NUMBERS,
        })
    );
}

#[test]
fn test_parse_target() {
    assert_eq!(parse_target("765"), Ok(765));
    assert_eq!(parse_target(" 10 "), Ok(10));
    assert_eq!(
        parse_target("ten"),
        Err(InputError::InvalidTarget("ten".to_string()))
    );
}

#[test]
fn test_target_bounds() {
    assert!(validate_target(MIN_TARGET).is_ok());
    assert!(validate_target(MAX_TARGET).is_ok());
    assert_eq!(
        validate_target(0),
        Err(InputError::TargetOutOfRange {
            target: 0,
            min: MIN_TARGET,
            max: MAX_TARGET,
        })
    );
    assert!(parse_target("1000").is_err());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        InputError::TooManyNumbers { count: 8, max: 6 }.to_string(),
        "Too many numbers: 8 given, at most 6 allowed"
    );
    assert_eq!(
        InputError::InvalidNumber("x".to_string()).to_string(),
        "Invalid number format: 'x'"
    );
}
