//! Argument-order flipping.
//!
//! - [`Function::flip_first_two_arguments`] swaps the first two arguments of a
//!   curried chain: `A -> (B -> C)` becomes `B -> (A -> C)`.
//! - [`Function::flip`] swaps the elements of a pair input: `(A, B) -> C`
//!   becomes `(B, A) -> C`.
//!
//! # Laws
//!
//! - **Double Flip Identity**: `f.flip().flip() == f`
//! - **Flip Definition**: `f.flip().apply((b, a)) == f.apply((a, b))`

use crate::function::{Function, Shareable};

impl<A: 'static, B: Clone + Shareable, C: 'static> Function<A, Function<B, C>> {
    /// Swaps the order in which the first two curried arguments are supplied.
    ///
    /// The result for a given logical pair of arguments is unchanged. Because
    /// `B` may itself be a tuple, this also flips a leading argument against a
    /// tuple of trailing arguments; the trailing tuple keeps its order.
    ///
    /// # Type Requirements
    ///
    /// `B` is captured by the returned partial application and supplied on
    /// every call, so it must implement [`Clone`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fnwrap::Function;
    ///
    /// let has_length = Function::new(|length: usize| {
    ///     Function::new(move |text: &'static str| text.len() == length)
    /// });
    ///
    /// let flipped = has_length.flip_first_two_arguments();
    /// assert!(flipped.apply("hi").apply(2));
    /// assert!(!flipped.apply("hi").apply(3));
    /// ```
    ///
    /// ## Against a tuple of trailing arguments
    ///
    /// ```
    /// use fnwrap::Function;
    ///
    /// let scale = Function::new(|factor: i32| {
    ///     Function::new(move |(x, y, z): (i32, i32, i32)| (x * factor, y * factor, z * factor))
    /// });
    ///
    /// let flipped = scale.flip_first_two_arguments();
    /// assert_eq!(flipped.apply((1, 2, 3)).apply(10), (10, 20, 30));
    /// ```
    pub fn flip_first_two_arguments(self) -> Function<B, Function<A, C>> {
        trace_combinator!("flip_first_two_arguments", A, B, C);
        Function::new(move |second: B| {
            let function = self.clone();
            Function::new(move |first: A| function.apply(first).apply(second.clone()))
        })
    }
}

impl<A: 'static, B: 'static, C: 'static> Function<(A, B), C> {
    /// Swaps the elements of a pair input.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnwrap::Function;
    ///
    /// let divide = Function::new(|(numerator, denominator): (f64, f64)| numerator / denominator);
    /// let flipped_divide = divide.clone().flip();
    ///
    /// // divide((10.0, 2.0)) = 5.0
    /// assert_eq!(divide.apply((10.0, 2.0)), 5.0);
    ///
    /// // flipped_divide((10.0, 2.0)) = divide((2.0, 10.0)) = 0.2
    /// assert!((flipped_divide.apply((10.0, 2.0)) - 0.2).abs() < f64::EPSILON);
    /// ```
    pub fn flip(self) -> Function<(B, A), C> {
        trace_combinator!("flip", A, B, C);
        Function::new(move |(second, first): (B, A)| self.apply((first, second)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Curry;
    use rstest::rstest;

    #[rstest]
    fn test_flip_first_two_arguments_with_curried_tuple_function() {
        let subtract =
            Function::new(|(minuend, subtrahend): (i32, i32)| minuend - subtrahend).curry();
        let flipped = subtract.flip_first_two_arguments();

        // flipped(3)(10) = subtract(10)(3)
        assert_eq!(flipped.apply(3).apply(10), 7);
    }

    #[rstest]
    fn test_flip_twice_is_identity() {
        fn power((base, exponent): (i32, u32)) -> i32 {
            base.pow(exponent)
        }

        let original = Function::new(power);
        let flipped_twice = original.clone().flip().flip();

        assert_eq!(original.apply((2, 3)), 8);
        assert_eq!(flipped_twice.apply((2, 3)), 8);
    }

    #[rstest]
    fn test_flip_first_two_arguments_twice_is_identity() {
        let concat = Function::new(|first: String| {
            Function::new(move |second: String| format!("{first}{second}"))
        });
        let restored = concat
            .clone()
            .flip_first_two_arguments()
            .flip_first_two_arguments();

        assert_eq!(
            restored.apply("a".to_string()).apply("b".to_string()),
            concat.apply("a".to_string()).apply("b".to_string())
        );
    }
}
