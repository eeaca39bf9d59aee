//! Integration and property tests for argument flipping.

use fnwrap::{Curry, Function};
use proptest::prelude::*;
use rstest::rstest;

// =============================================================================
// flip_first_two_arguments
// =============================================================================

#[rstest]
fn test_flip_first_two_arguments_length_check() {
    let has_length = Function::new(|length: usize| {
        Function::new(move |text: &'static str| text.len() == length)
    });

    let flipped = has_length.flip_first_two_arguments();

    assert!(flipped.apply("hi").apply(2));
    assert!(!flipped.apply("hi").apply(5));
    assert!(flipped.apply("").apply(0));
}

#[rstest]
fn test_flip_first_two_arguments_partial_reuse() {
    let divide =
        Function::new(|(numerator, denominator): (i32, i32)| numerator / denominator).curry();
    let divide_by_two = divide.flip_first_two_arguments().apply(2);

    assert_eq!(divide_by_two.apply(10), 5);
    assert_eq!(divide_by_two.apply(7), 3);
}

#[rstest]
fn test_flip_first_two_arguments_keeps_remaining_curried_arguments() {
    let describe = Function::new(|(name, age, city): (String, u32, String)| {
        format!("{name} ({age}) from {city}")
    })
    .curry();

    let by_age_first = describe.flip_first_two_arguments();
    let thirty = by_age_first.apply(30);

    assert_eq!(
        thirty.apply("Ada".to_string()).apply("London".to_string()),
        "Ada (30) from London"
    );
}

#[rstest]
fn test_flip_first_argument_against_trailing_tuple() {
    let offset_point = Function::new(|offset: i32| {
        Function::new(move |(x, y): (i32, i32)| (x + offset, y + offset))
    });

    let flipped = offset_point.flip_first_two_arguments();
    assert_eq!(flipped.apply((1, 2)).apply(10), (11, 12));
}

// =============================================================================
// flip
// =============================================================================

#[rstest]
#[case(2, 3, 9)]
#[case(3, 2, 8)]
#[case(0, 10, 1)]
fn test_flip_pair(#[case] exponent: u32, #[case] base: i64, #[case] expected: i64) {
    let power = Function::new(|(base, exponent): (i64, u32)| base.pow(exponent));
    assert_eq!(power.flip().apply((exponent, base)), expected);
}

#[rstest]
fn test_flip_heterogeneous_pair() {
    let repeat = Function::new(|(text, times): (&'static str, usize)| text.repeat(times));
    let flipped = repeat.flip();

    assert_eq!(flipped.apply((3, "ab")), "ababab");
}

// =============================================================================
// Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_flip_definition(a in any::<i32>(), b in any::<i32>()) {
        let subtract = Function::new(|(left, right): (i32, i32)| left.wrapping_sub(right));
        prop_assert_eq!(subtract.clone().flip().apply((b, a)), subtract.apply((a, b)));
    }

    #[test]
    fn prop_flip_twice_is_identity(a in any::<i32>(), b in any::<String>()) {
        let describe = Function::new(|(number, text): (i32, String)| format!("{number}:{text}"));
        let restored = describe.clone().flip().flip();

        prop_assert_eq!(restored.apply((a, b.clone())), describe.apply((a, b)));
    }

    #[test]
    fn prop_flip_first_two_arguments_definition(a in any::<i32>(), b in any::<i32>()) {
        let subtract = Function::new(|(left, right): (i32, i32)| left.wrapping_sub(right)).curry();
        let flipped = subtract.clone().flip_first_two_arguments();

        prop_assert_eq!(flipped.apply(b).apply(a), subtract.apply(a).apply(b));
    }

    #[test]
    fn prop_flip_first_two_arguments_twice_is_identity(a in any::<i64>(), b in any::<i64>()) {
        let weigh = |(left, right): (i64, i64)| left.wrapping_mul(3).wrapping_add(right);
        let combine = Function::new(weigh).curry();
        let restored = combine.clone().flip_first_two_arguments().flip_first_two_arguments();

        prop_assert_eq!(restored.apply(a).apply(b), combine.apply(a).apply(b));
    }
}
