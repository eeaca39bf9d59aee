//! Composition combinators.
//!
//! This module builds new [`Function`]s out of existing ones by sequencing
//! them. It enables declarative, point-free pipelines where each step is a
//! `Function` or a plain closure.
//!
//! # Overview
//!
//! - [`Function::pipe`] / [`pipeline!`]: compose left-to-right (data flow style)
//! - [`Function::compose`] / [`composition!`]: compose right-to-left (mathematical composition)
//! - [`Function::concatenate`] / [`concatenate!`]: sequence endomorphisms `T -> T`
//! - [`Function::chain`] / [`chain!`]: compose `Option`-returning steps, stopping at the first `None`
//! - [`Function::try_chain`]: the same short-circuit over `Result`
//!
//! # Examples
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use fnwrap::pipeline;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // pipeline!(f, g)(x) = g(f(x))
//! let pipelined = pipeline!(double, add_one);
//! assert_eq!(pipelined.apply(5), 11); // add_one(double(5)) = 11
//! ```
//!
//! ## Composition (right-to-left)
//!
//! ```
//! use fnwrap::composition;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // composition!(f, g)(x) = f(g(x))
//! let composed = composition!(add_one, double);
//! assert_eq!(composed.apply(5), 11); // add_one(double(5)) = 11
//! ```
//!
//! ## Optional chaining
//!
//! ```
//! use fnwrap::Function;
//!
//! let parse = Function::new(|text: &'static str| text.parse::<i32>().ok());
//! let reciprocal = |value: i32| if value == 0 { None } else { Some(100 / value) };
//!
//! let parse_then_invert = parse.chain(reciprocal);
//! assert_eq!(parse_then_invert.apply("4"), Some(25));
//! assert_eq!(parse_then_invert.apply("0"), None);
//! assert_eq!(parse_then_invert.apply("four"), None);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `f.pipe(g).pipe(h) == f.pipe(g.pipe(h))`
//! - **Left Identity**: `identity().pipe(f) == f`
//! - **Right Identity**: `f.pipe(identity()) == f`
//! - **Duality**: `f.compose(g) == g.pipe(f)`
//!
//! Equality here is extensional: both sides produce the same output for
//! every input.

mod chain_macro;
mod composition_macro;
mod concatenate_macro;
mod pipeline_macro;

use crate::function::{Function, IntoFunction};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::chain;
pub use crate::composition;
pub use crate::concatenate;
pub use crate::pipeline;

// =============================================================================
// Forward and Backward Composition
// =============================================================================

impl<In: 'static, Out: 'static> Function<In, Out> {
    /// Composes left-to-right: applies `self`, then feeds the result to `next`.
    ///
    /// Given `self: In -> Out` and `next: Out -> Next`, returns `In -> Next`.
    ///
    /// # Arguments
    ///
    /// * `next` - The `Function` or closure to run on this function's output
    ///
    /// # Examples
    ///
    /// ```
    /// use fnwrap::Function;
    ///
    /// let to_string = Function::new(|value: i32| value.to_string());
    /// let length = to_string.pipe(|text: String| text.len());
    ///
    /// assert_eq!(length.apply(12345), 5);
    /// ```
    pub fn pipe<Next: 'static>(self, next: impl IntoFunction<Out, Next>) -> Function<In, Next> {
        trace_combinator!("pipe", In, Out, Next);
        let next = next.into_function();
        Function::new(move |input| next.apply(self.apply(input)))
    }

    /// Composes right-to-left: applies `previous`, then feeds the result to `self`.
    ///
    /// Given `self: In -> Out` and `previous: Before -> In`, returns
    /// `Before -> Out`. This is the dual of [`pipe`](Self::pipe):
    /// `f.compose(g)` behaves as `g.pipe(f)`.
    ///
    /// # Arguments
    ///
    /// * `previous` - The `Function` or closure whose output feeds this function
    ///
    /// # Examples
    ///
    /// ```
    /// use fnwrap::Function;
    ///
    /// let add_one = Function::new(|value: i32| value + 1);
    /// let add_one_after_double = add_one.compose(|value: i32| value * 2);
    ///
    /// assert_eq!(add_one_after_double.apply(5), 11);
    /// ```
    pub fn compose<Before: 'static>(
        self,
        previous: impl IntoFunction<Before, In>,
    ) -> Function<Before, Out> {
        trace_combinator!("compose", Before, In, Out);
        let previous = previous.into_function();
        Function::new(move |input| self.apply(previous.apply(input)))
    }
}

// =============================================================================
// Concatenation
// =============================================================================

impl<T: 'static> Function<T, T> {
    /// Sequences endomorphisms, feeding the input through each in order.
    ///
    /// An empty sequence yields the identity. The sequence is collected once,
    /// when the combinator is built.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnwrap::Function;
    ///
    /// let add_one = Function::new(|value: i32| value + 1);
    /// let double = Function::new(|value: i32| value * 2);
    ///
    /// let concatenated = Function::concatenate([add_one, double]);
    /// assert_eq!(concatenated.apply(3), 8); // 3 -> 4 -> 8
    /// ```
    pub fn concatenate<I>(functions: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::concatenate_then(functions, Self::identity())
    }

    /// Sequences endomorphisms, then applies `finally` to the result.
    ///
    /// # Arguments
    ///
    /// * `functions` - The steps to run in order
    /// * `finally` - The step to run last
    ///
    /// # Examples
    ///
    /// ```
    /// use fnwrap::Function;
    ///
    /// let trim = Function::new(|text: String| text.trim().to_string());
    /// let shout = Function::new(|text: String| text.to_uppercase());
    ///
    /// let normalized = Function::concatenate_then([trim, shout], |text: String| format!("{text}!"));
    /// assert_eq!(normalized.apply("  hello ".to_string()), "HELLO!");
    /// ```
    pub fn concatenate_then<I>(functions: I, finally: impl IntoFunction<T, T>) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let steps: Vec<Self> = functions
            .into_iter()
            .chain(std::iter::once(finally.into_function()))
            .collect();
        trace_combinator!("concatenate", T);
        Self::new(move |input| {
            steps
                .iter()
                .fold(input, |accumulator, step| step.apply(accumulator))
        })
    }
}

// =============================================================================
// Short-circuit Chaining
// =============================================================================

impl<In: 'static, Middle: 'static> Function<In, Option<Middle>> {
    /// Composes `Option`-returning steps, stopping at the first `None`.
    ///
    /// Given `self: In -> Option<Middle>` and `next: Middle -> Option<Out>`,
    /// returns `In -> Option<Out>`. When `self` yields `None`, `next` is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnwrap::Function;
    ///
    /// let first_character = Function::new(|text: String| text.chars().next());
    /// let as_digit = first_character.chain(|character: char| character.to_digit(10));
    ///
    /// assert_eq!(as_digit.apply("7up".to_string()), Some(7));
    /// assert_eq!(as_digit.apply("up".to_string()), None);
    /// assert_eq!(as_digit.apply(String::new()), None);
    /// ```
    pub fn chain<Out: 'static>(
        self,
        next: impl IntoFunction<Middle, Option<Out>>,
    ) -> Function<In, Option<Out>> {
        trace_combinator!("chain", In, Middle, Out);
        let next = next.into_function();
        Function::new(move |input| self.apply(input).and_then(|middle| next.apply(middle)))
    }
}

impl<In: 'static, Middle: 'static, Error: 'static> Function<In, Result<Middle, Error>> {
    /// Composes `Result`-returning steps, stopping at the first `Err`.
    ///
    /// The error is handed back unchanged; no conversion or recovery is
    /// attempted.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnwrap::Function;
    ///
    /// let parse = Function::new(|text: &'static str| text.parse::<u8>().map_err(|_| "not a number"));
    /// let halve = |value: u8| if value % 2 == 0 { Ok(value / 2) } else { Err("odd") };
    ///
    /// let parse_then_halve = parse.try_chain(halve);
    /// assert_eq!(parse_then_halve.apply("42"), Ok(21));
    /// assert_eq!(parse_then_halve.apply("7"), Err("odd"));
    /// assert_eq!(parse_then_halve.apply("x"), Err("not a number"));
    /// ```
    pub fn try_chain<Out: 'static>(
        self,
        next: impl IntoFunction<Middle, Result<Out, Error>>,
    ) -> Function<In, Result<Out, Error>> {
        trace_combinator!("try_chain", In, Middle, Out, Error);
        let next = next.into_function();
        Function::new(move |input| self.apply(input).and_then(|middle| next.apply(middle)))
    }
}
