//! Property-based tests for composition laws.
//!
//! ## Composition Laws
//! - **Associativity**: `f.pipe(g).pipe(h) == f.pipe(g.pipe(h))`
//! - **Left Identity**: `identity().pipe(f) == f`
//! - **Right Identity**: `f.pipe(identity()) == f`
//! - **Duality**: `f.compose(g) == g.pipe(f)`
//!
//! ## Concatenation Laws
//! - **Empty**: `concatenate([]) == identity()`
//! - **Fold**: `concatenate([f, g, h]) == f.pipe(g).pipe(h)`
//!
//! ## Constant Laws
//! - **Absorption**: `f.pipe(constant(c)) == constant(c)`

use fnwrap::{Function, composition, pipeline};
use proptest::prelude::*;

fn increment() -> Function<i32, i32> {
    Function::new(|value: i32| value.wrapping_add(1))
}

fn double() -> Function<i32, i32> {
    Function::new(|value: i32| value.wrapping_mul(2))
}

fn subtract_three() -> Function<i32, i32> {
    Function::new(|value: i32| value.wrapping_sub(3))
}

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_pipe_left_identity(x in any::<i32>()) {
        let piped = Function::identity().pipe(double());
        prop_assert_eq!(piped.apply(x), double().apply(x));
    }

    #[test]
    fn prop_pipe_right_identity(x in any::<i32>()) {
        let piped = double().pipe(Function::identity());
        prop_assert_eq!(piped.apply(x), double().apply(x));
    }

    #[test]
    fn prop_pipe_associativity(x in any::<i32>()) {
        let left = increment().pipe(double()).pipe(subtract_three());
        let right = increment().pipe(double().pipe(subtract_three()));

        prop_assert_eq!(left.apply(x), right.apply(x));
    }

    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let left = increment().compose(double()).compose(subtract_three());
        let right = increment().compose(double().compose(subtract_three()));

        prop_assert_eq!(left.apply(x), right.apply(x));
    }

    #[test]
    fn prop_compose_is_dual_of_pipe(x in any::<i32>()) {
        let composed = increment().compose(double());
        let piped = double().pipe(increment());

        prop_assert_eq!(composed.apply(x), piped.apply(x));
    }

    #[test]
    fn prop_macros_match_methods(x in any::<i32>()) {
        let by_pipeline = pipeline!(increment(), double(), subtract_three());
        let by_composition = composition!(subtract_three(), double(), increment());
        let by_method = increment().pipe(double()).pipe(subtract_three());

        prop_assert_eq!(by_pipeline.apply(x), by_method.apply(x));
        prop_assert_eq!(by_composition.apply(x), by_method.apply(x));
    }
}

// =============================================================================
// Concatenation Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_concatenate_empty_is_identity(x in any::<i32>()) {
        let concatenated = Function::<i32, i32>::concatenate(Vec::new());
        prop_assert_eq!(concatenated.apply(x), x);
    }

    #[test]
    fn prop_concatenate_matches_pipe_fold(x in any::<i32>()) {
        let concatenated = Function::concatenate([increment(), double(), subtract_three()]);
        let piped = increment().pipe(double()).pipe(subtract_three());

        prop_assert_eq!(concatenated.apply(x), piped.apply(x));
    }
}

// =============================================================================
// Constant Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_constant_absorbs_previous(x in any::<i32>(), constant in any::<i64>()) {
        let piped = double().pipe(Function::constant(constant));
        prop_assert_eq!(piped.apply(x), constant);
    }

    #[test]
    fn prop_constant_after_identity(x in any::<i32>(), constant in any::<i64>()) {
        let composed = Function::<i32, i64>::constant(constant).compose(Function::identity());
        prop_assert_eq!(composed.apply(x), constant);
    }
}
