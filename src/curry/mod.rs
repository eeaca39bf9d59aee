//! Currying and uncurrying over tuple inputs.
//!
//! A [`Function`] whose input is a tuple `(A, B, ..., N)` can be curried into
//! a right-nested chain of single-argument functions,
//! `Function<A, Function<B, ... Function<N, Out>>>`, and a chain can be
//! uncurried back into the tuple form.
//!
//! Both directions are implemented for tuple arities 1 through 8 by one
//! recursive macro: arity `N` is defined in terms of arity `N - 1`, so the
//! nesting is generated rather than spelled out per arity.
//!
//! # Laws
//!
//! - **Equivalence**: `f.curry().apply(a).apply(b)...apply(n) == f.apply((a, b, ..., n))`
//! - **Inverse**: `f.curry().uncurry() == f` and `g.uncurry().curry() == g`
//!
//! # Examples
//!
//! ```
//! use fnwrap::{Curry, Function, Uncurry};
//!
//! let volume = Function::new(|(width, height, depth): (u32, u32, u32)| width * height * depth);
//!
//! let curried = volume.clone().curry();
//! let two_wide = curried.apply(2);
//! let two_by_three = two_wide.apply(3);
//! assert_eq!(two_by_three.apply(4), 24);
//! assert_eq!(two_by_three.apply(5), 30);
//!
//! let uncurried: Function<(u32, u32, u32), u32> = curried.uncurry();
//! assert_eq!(uncurried.apply((2, 3, 4)), volume.apply((2, 3, 4)));
//! ```

mod flip;

use crate::function::{Function, Shareable};

// =============================================================================
// Curry
// =============================================================================

/// Converts a tuple-input [`Function`] into a chain of single-argument functions.
///
/// Implemented for every `Function` whose input is a tuple of 1 to 8
/// elements.
///
/// # Type Requirements
///
/// Every element type except the last must implement [`Clone`]: a partial
/// application such as `curried.apply(a)` can be applied again and again, and
/// each full application needs its own copy of `a`.
///
/// # Examples
///
/// ```
/// use fnwrap::{Curry, Function};
///
/// let greet = Function::new(|(greeting, name): (&'static str, &'static str)| {
///     format!("{greeting}, {name}")
/// });
/// let hello = greet.curry().apply("Hello");
///
/// assert_eq!(hello.apply("World"), "Hello, World");
/// assert_eq!(hello.apply("Rust"), "Hello, Rust");
/// ```
pub trait Curry {
    /// The right-nested chain produced by currying.
    type Curried;

    /// Curries this function.
    fn curry(self) -> Self::Curried;
}

impl<T: nesting::Nest> Curry for T {
    type Curried = T::Nested;

    fn curry(self) -> Self::Curried {
        trace_combinator!("curry", T, T::Nested);
        self.nest()
    }
}

mod nesting {
    use crate::function::{Function, Shareable};

    /// Builds the curried chain one level at a time.
    ///
    /// Inner levels are built during `apply` and must not emit trace events;
    /// only [`Curry::curry`](super::Curry::curry) traces.
    pub trait Nest {
        type Nested;

        fn nest(self) -> Self::Nested;
    }

    impl<A: 'static, Out: 'static> Nest for Function<(A,), Out> {
        type Nested = Function<A, Out>;

        fn nest(self) -> Self::Nested {
            Function::new(move |first: A| self.apply((first,)))
        }
    }

    /// Implements [`Nest`] for `(Head, Tail...)` in terms of `(Tail...)`, then
    /// recurses on the tail.
    macro_rules! impl_nest {
        ($head:ident $(, $tail:ident)+) => {
            paste::paste! {
                impl<$head, $($tail,)+ Out> Nest for Function<($head, $($tail,)+), Out>
                where
                    $head: Clone + Shareable,
                    $($tail: 'static,)+
                    Out: 'static,
                    Function<($($tail,)+), Out>: Nest,
                {
                    type Nested = Function<$head, <Function<($($tail,)+), Out> as Nest>::Nested>;

                    fn nest(self) -> Self::Nested {
                        Function::new(move |[<$head:lower>]: $head| {
                            let function = self.clone();
                            Function::new(move |($([<$tail:lower>],)+): ($($tail,)+)| {
                                function.apply(([<$head:lower>].clone(), $([<$tail:lower>],)+))
                            })
                            .nest()
                        })
                    }
                }
            }

            impl_nest!($($tail),+);
        };
        ($head:ident) => {};
    }

    impl_nest!(A, B, C, D, E, F, G, H);
}

// =============================================================================
// Uncurry
// =============================================================================

/// Converts a right-nested chain of single-argument functions into a
/// tuple-input [`Function`].
///
/// The `Arguments` parameter selects how deep to unnest: a chain
/// `Function<A, Function<B, Function<C, Out>>>` implements both
/// `Uncurry<(A, B, C)>` (output `Out`) and `Uncurry<(A, B)>` (output
/// `Function<C, Out>`). The target is usually picked by annotating the result.
///
/// # Examples
///
/// ```
/// use fnwrap::{Function, Uncurry};
///
/// let add = Function::new(|first: i32| Function::new(move |second: i32| first + second));
///
/// assert_eq!(add.apply_uncurried((2, 3)), 5);
///
/// let uncurried: Function<(i32, i32), i32> = add.uncurry();
/// assert_eq!(uncurried.apply((2, 3)), 5);
/// ```
pub trait Uncurry<Arguments> {
    /// The final output of the chain after all of `Arguments` are supplied.
    type Output;

    /// Supplies every element of `arguments` in order, without building a new
    /// `Function`.
    fn apply_uncurried(&self, arguments: Arguments) -> Self::Output;

    /// Uncurries this chain into a tuple-input `Function`.
    fn uncurry(self) -> Function<Arguments, Self::Output>
    where
        Self: Sized + Shareable,
    {
        trace_combinator!("uncurry", Self, Arguments);
        Function::new(move |arguments| self.apply_uncurried(arguments))
    }
}

impl<A, Out> Uncurry<(A,)> for Function<A, Out> {
    type Output = Out;

    fn apply_uncurried(&self, (first,): (A,)) -> Self::Output {
        self.apply(first)
    }
}

/// Implements [`Uncurry`] for `(Head, Tail...)` by applying the head and
/// delegating the tail to the returned function, then recurses on the tail.
macro_rules! impl_uncurry {
    ($head:ident $(, $tail:ident)+) => {
        paste::paste! {
            impl<$head, $($tail,)+ Next> Uncurry<($head, $($tail,)+)> for Function<$head, Next>
            where
                Next: Uncurry<($($tail,)+)>,
            {
                type Output = <Next as Uncurry<($($tail,)+)>>::Output;

                fn apply_uncurried(
                    &self,
                    ([<$head:lower>], $([<$tail:lower>],)+): ($head, $($tail,)+),
                ) -> Self::Output {
                    self.apply([<$head:lower>]).apply_uncurried(($([<$tail:lower>],)+))
                }
            }
        }

        impl_uncurry!($($tail),+);
    };
    ($head:ident) => {};
}

impl_uncurry!(A, B, C, D, E, F, G, H);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_curry_single_element_tuple() {
        let negate = Function::new(|(value,): (i32,)| -value);
        assert_eq!(negate.curry().apply(4), -4);
    }

    #[rstest]
    fn test_curry_two() {
        let subtract = Function::new(|(minuend, subtrahend): (i32, i32)| minuend - subtrahend);
        let from_ten = subtract.curry().apply(10);

        assert_eq!(from_ten.apply(3), 7);
        assert_eq!(from_ten.apply(-3), 13);
    }

    #[rstest]
    fn test_curry_eight() {
        type Eight = (u8, u8, u8, u8, u8, u8, u8, u8);
        let digits = Function::new(|(a, b, c, d, e, f, g, h): Eight| {
            [a, b, c, d, e, f, g, h]
                .iter()
                .fold(0_u64, |number, digit| number * 10 + u64::from(*digit))
        });

        let curried = digits.curry();
        let result = curried
            .apply(1)
            .apply(2)
            .apply(3)
            .apply(4)
            .apply(5)
            .apply(6)
            .apply(7)
            .apply(8);
        assert_eq!(result, 12_345_678);
    }

    #[rstest]
    fn test_curry_clones_partial_arguments() {
        let join = Function::new(|(prefix, suffix): (String, String)| prefix + &suffix);
        let with_prefix = join.curry().apply("pre".to_string());

        assert_eq!(with_prefix.apply("fix".to_string()), "prefix");
        assert_eq!(with_prefix.apply("view".to_string()), "preview");
    }

    #[rstest]
    fn test_uncurry_partial_depth() {
        let add_three = Function::new(|(a, b, c): (i32, i32, i32)| a + b + c).curry();

        let two_then_one: Function<(i32, i32), Function<i32, i32>> = add_three.uncurry();
        assert_eq!(two_then_one.apply((1, 2)).apply(3), 6);
    }
}
