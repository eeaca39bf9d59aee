//! Promotion between boxed native closures and [`Function`].
//!
//! A combinator whose input or output is itself a native closure can be
//! promoted so that the closure position holds a `Function` instead. The
//! adaptation is purely type-level: the promoted combinator computes exactly
//! what the unpromoted one does.
//!
//! Native closures have unnameable types, so the promotable forms are the
//! boxed trait objects [`Native1`] through [`Native6`]. Without the `arc`
//! feature these are `Box<dyn Fn(..) -> Out>`; with it they are
//! `Box<dyn Fn(..) -> Out + Send + Sync>`.
//!
//! # Examples
//!
//! ```
//! use fnwrap::{Function, Native2};
//!
//! // Takes a native binary operator and applies it to (6, 7).
//! let apply_to_six_seven = Function::new(|operator: Native2<i32, i32, i32>| operator(6, 7));
//!
//! // Promoted, the same combinator takes a `Function` over the argument tuple.
//! let promoted = apply_to_six_seven.promote_input();
//! let multiply = Function::new(|(left, right): (i32, i32)| left * right);
//!
//! assert_eq!(promoted.apply(multiply), 42);
//! ```

use crate::function::{Function, Shareable};

/// A boxed native closure that converts to and from a [`Function`].
///
/// Implemented for the boxed closure aliases [`Native1`] through [`Native6`].
/// For arity 1, [`Arguments`](Self::Arguments) is the single argument type;
/// for higher arities it is the argument tuple.
pub trait Native: Sized + Shareable {
    /// The input of the equivalent `Function`.
    type Arguments;

    /// The output of the closure.
    type Output;

    /// Wraps this closure as a `Function` over its arguments.
    fn into_function(self) -> Function<Self::Arguments, Self::Output>;

    /// Unwraps a `Function` back into a boxed native closure.
    fn from_function(function: Function<Self::Arguments, Self::Output>) -> Self;
}

/// Declares the boxed closure aliases with the auto-trait bounds required by
/// the active configuration.
macro_rules! native_aliases {
    ($($auto:ident)*) => {
        /// A boxed native closure of one argument.
        pub type Native1<A, Out> = Box<dyn Fn(A) -> Out $(+ $auto)*>;
        /// A boxed native closure of two arguments.
        pub type Native2<A, B, Out> = Box<dyn Fn(A, B) -> Out $(+ $auto)*>;
        /// A boxed native closure of three arguments.
        pub type Native3<A, B, C, Out> = Box<dyn Fn(A, B, C) -> Out $(+ $auto)*>;
        /// A boxed native closure of four arguments.
        pub type Native4<A, B, C, D, Out> = Box<dyn Fn(A, B, C, D) -> Out $(+ $auto)*>;
        /// A boxed native closure of five arguments.
        pub type Native5<A, B, C, D, E, Out> = Box<dyn Fn(A, B, C, D, E) -> Out $(+ $auto)*>;
        /// A boxed native closure of six arguments.
        pub type Native6<A, B, C, D, E, F, Out> =
            Box<dyn Fn(A, B, C, D, E, F) -> Out $(+ $auto)*>;
    };
}

#[cfg(not(feature = "arc"))]
native_aliases!();

#[cfg(feature = "arc")]
native_aliases!(Send Sync);

impl<A: 'static, Out: 'static> Native for Native1<A, Out> {
    type Arguments = A;
    type Output = Out;

    fn into_function(self) -> Function<A, Out> {
        Function::new(move |argument: A| self(argument))
    }

    fn from_function(function: Function<A, Out>) -> Self {
        Box::new(move |argument: A| function.apply(argument))
    }
}

/// Implements [`Native`] for a multi-argument alias, passing the arguments
/// as a tuple.
macro_rules! impl_native {
    ($alias:ident, $($argument:ident),+) => {
        paste::paste! {
            impl<$($argument: 'static,)+ Out: 'static> Native for $alias<$($argument,)+ Out> {
                type Arguments = ($($argument,)+);
                type Output = Out;

                fn into_function(self) -> Function<Self::Arguments, Out> {
                    Function::new(move |($([<$argument:lower>],)+): ($($argument,)+)| {
                        self($([<$argument:lower>]),+)
                    })
                }

                fn from_function(function: Function<Self::Arguments, Out>) -> Self {
                    Box::new(move |$([<$argument:lower>]: $argument),+| {
                        function.apply(($([<$argument:lower>],)+))
                    })
                }
            }
        }
    };
}

impl_native!(Native2, A, B);
impl_native!(Native3, A, B, C);
impl_native!(Native4, A, B, C, D);
impl_native!(Native5, A, B, C, D, E);
impl_native!(Native6, A, B, C, D, E, F);

impl<In: 'static, Out: 'static> Function<In, Out> {
    /// Builds a `Function` from a boxed native closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnwrap::{Function, Native2};
    ///
    /// let native: Native2<i32, i32, i32> = Box::new(|left, right| left - right);
    /// let function = Function::from_native(native);
    ///
    /// assert_eq!(function.apply((9, 4)), 5);
    /// ```
    pub fn from_native<N>(native: N) -> Self
    where
        N: Native<Arguments = In, Output = Out>,
    {
        trace_combinator!("from_native", N);
        Native::into_function(native)
    }

    /// Converts this `Function` into the boxed native closure `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnwrap::{Function, Native2};
    ///
    /// let add = Function::new(|(left, right): (i32, i32)| left + right);
    /// let native: Native2<i32, i32, i32> = add.into_native();
    ///
    /// assert_eq!(native(2, 3), 5);
    /// ```
    pub fn into_native<N>(self) -> N
    where
        N: Native<Arguments = In, Output = Out>,
    {
        trace_combinator!("into_native", N);
        N::from_function(self)
    }
}

impl<N: Native, Out: 'static> Function<N, Out>
where
    N::Arguments: 'static,
    N::Output: 'static,
{
    /// Promotes a native-closure input to a `Function` input.
    ///
    /// The returned combinator unwraps the supplied `Function` into the native
    /// closure this combinator expects, then applies this combinator.
    pub fn promote_input(self) -> Function<Function<N::Arguments, N::Output>, Out> {
        trace_combinator!("promote_input", N, Out);
        Function::new(move |function: Function<N::Arguments, N::Output>| {
            self.apply(N::from_function(function))
        })
    }
}

impl<In: 'static, N: Native> Function<In, N>
where
    N::Arguments: 'static,
    N::Output: 'static,
{
    /// Promotes a native-closure output to a `Function` output.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnwrap::{Function, Native1};
    ///
    /// let adder = Function::new(|offset: i32| -> Native1<i32, i32> {
    ///     Box::new(move |value| value + offset)
    /// });
    ///
    /// let promoted = adder.promote_output();
    /// let add_five = promoted.apply(5);
    ///
    /// assert_eq!(add_five.pipe(|value: i32| value * 2).apply(1), 12);
    /// ```
    pub fn promote_output(self) -> Function<In, Function<N::Arguments, N::Output>> {
        trace_combinator!("promote_output", In, N);
        Function::new(move |input: In| Native::into_function(self.apply(input)))
    }
}
