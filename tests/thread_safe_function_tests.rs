//! Integration tests for sharing combinators across threads.
//!
//! These tests verify that, with the `arc` feature enabled, every combinator
//! yields a `Function` that can be sent to and applied from other threads.

#![cfg(feature = "arc")]

use fnwrap::{Curry, Function, Mutator, Native1};
use rstest::rstest;
use std::thread;

#[rstest]
fn test_composed_function_across_threads() {
    let pipeline = Function::new(|value: i64| value * 2).pipe(|value: i64| value + 1);

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let pipeline = pipeline.clone();
            thread::spawn(move || pipeline.apply(index))
        })
        .collect();

    let results: Vec<i64> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread panicked"))
        .collect();

    assert_eq!(results, vec![1, 3, 5, 7]);
}

#[rstest]
fn test_curried_partial_application_across_threads() {
    let add = Function::new(|(first, second): (String, String)| first + &second);
    let with_prefix = add.curry().apply("thread-".to_string());

    let handle = thread::spawn(move || with_prefix.apply("worker".to_string()));

    assert_eq!(handle.join().expect("thread panicked"), "thread-worker");
}

#[rstest]
fn test_promoted_function_across_threads() {
    let apply_to_three = Function::new(|step: Native1<i32, i32>| step(3)).promote_input();

    let handle = thread::spawn(move || {
        apply_to_three.apply(Function::new(|value: i32| value * value))
    });

    assert_eq!(handle.join().expect("thread panicked"), 9);
}

#[rstest]
fn test_mutator_across_threads() {
    let append = Mutator::new(|values: &mut Vec<u8>| values.push(1));

    let handle = thread::spawn(move || {
        let mut values = Vec::new();
        append.mutate(&mut values);
        append.mutate(&mut values);
        values
    });

    assert_eq!(handle.join().expect("thread panicked"), vec![1, 1]);
}

#[rstest]
fn test_function_shared_by_reference_with_scoped_threads() {
    let square = Function::new(|value: u32| value * value);

    let total: u32 = thread::scope(|scope| {
        let handles: Vec<_> = (1..=3)
            .map(|value| {
                let square = &square;
                scope.spawn(move || square.apply(value))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("thread panicked"))
            .sum()
    });

    assert_eq!(total, 14);
}
