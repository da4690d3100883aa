use std::collections::HashSet;

use crate::choices::{choice_count, choices, interleave, perms, subsequences};

#[test]
fn test_interleave_into_empty() {
    assert_eq!(interleave(1, &[]), vec![vec![1]]);
}

#[test]
fn test_interleave_every_position() {
    assert_eq!(
        interleave(1, &[2, 3]),
        vec![vec![1, 2, 3], vec![2, 1, 3], vec![2, 3, 1]]
    );
}

#[test]
fn test_perms_of_empty_is_single_empty() {
    assert_eq!(perms(&[]), vec![Vec::<i64>::new()]);
}

#[test]
fn test_perms_of_three() {
    let result = perms(&[1, 2, 3]);
    assert_eq!(
        result,
        vec![
            vec![1, 2, 3],
            vec![2, 1, 3],
            vec![2, 3, 1],
            vec![1, 3, 2],
            vec![3, 1, 2],
            vec![3, 2, 1],
        ]
    );
}

#[test]
fn test_subsequences_of_three() {
    let subs = subsequences(&[1, 2, 3]);
    assert_eq!(subs.len(), 7);
    assert_eq!(subs.first(), Some(&vec![1]));
    assert_eq!(subs.last(), Some(&vec![1, 2, 3]));
}

#[test]
fn test_subsequences_with_repeated_value() {
    let subs = subsequences(&[4, 4, 2]);
    let expected: HashSet<Vec<i64>> = [
        vec![4],
        vec![2],
        vec![4, 4],
        vec![4, 2],
        vec![4, 4, 2],
    ]
    .into_iter()
    .collect();
    assert_eq!(subs.len(), expected.len());
    assert_eq!(subs.into_iter().collect::<HashSet<_>>(), expected);
}

#[test]
fn test_choices_of_two() {
    let all: Vec<_> = choices(&[2, 3]).collect();
    assert_eq!(all, vec![vec![2], vec![3], vec![2, 3], vec![3, 2]]);
}

#[test]
fn test_choice_count_formula() {
    assert_eq!(choice_count(0), 0);
    assert_eq!(choice_count(1), 1);
    assert_eq!(choice_count(3), 15);
    assert_eq!(choice_count(6), 1956);
}

#[test]
fn test_six_numbers_yield_every_distinct_sequence() {
    let all: Vec<_> = choices(&[1, 3, 7, 10, 25, 50]).collect();
    assert_eq!(all.len(), choice_count(6));
    assert_eq!(all.len(), 1956);
    let unique: HashSet<_> = all.iter().collect();
    assert_eq!(unique.len(), all.len());
}

#[test]
fn test_choices_are_sub_multisets() {
    let input = [1, 3, 7, 10];
    for seq in choices(&input) {
        assert!(!seq.is_empty());
        let mut pool = input.to_vec();
        for n in &seq {
            let pos = pool.iter().position(|m| m == n);
            assert!(pos.is_some(), "{:?} is not drawn from {:?}", seq, input);
            if let Some(pos) = pos {
                pool.remove(pos);
            }
        }
    }
}

#[test]
fn test_choices_with_duplicates_emit_each_sequence_once() {
    let all: Vec<_> = choices(&[1, 1]).collect();
    assert_eq!(all, vec![vec![1], vec![1, 1]]);
}

#[test]
fn test_choices_of_empty_input() {
    assert_eq!(choices(&[]).count(), 0);
}

#[test]
fn test_choices_is_deterministic() {
    let first: Vec<_> = choices(&[5, 8, 2, 9]).collect();
    let second: Vec<_> = choices(&[5, 8, 2, 9]).collect();
    assert_eq!(first, second);
}
