//! The `Function` wrapper type.
//!
//! A [`Function<In, Out>`] holds exactly one transformation `In -> Out`,
//! captured at construction and never replaced. Every combinator in this
//! crate builds a new `Function` whose transformation calls
//! [`Function::apply`] on existing ones, so `apply` is the only primitive.
//!
//! # Examples
//!
//! ```
//! use fnwrap::Function;
//!
//! let length = Function::new(|text: &'static str| text.len());
//! assert_eq!(length.apply("hello"), 5);
//!
//! // Cloning shares the held transformation.
//! let shared = length.clone();
//! assert_eq!(shared.apply("hi"), 2);
//! ```
//!
//! # Failure Propagation
//!
//! A `Function` adds no failure handling of its own. If the held
//! transformation panics, the panic reaches the caller of `apply` unchanged:
//!
//! ```should_panic
//! use fnwrap::Function;
//!
//! let divide_ten_by = Function::new(|divisor: i32| 10 / divisor);
//! divide_ten_by.apply(0);
//! ```

mod shared;

use std::any::type_name;
use std::fmt;

pub use shared::Shareable;
pub(crate) use shared::{ReferenceCounter, SharedCallback, SharedTransformation};

/// A wrapped single-argument transformation.
///
/// `Function` is immutable after construction. Cloning is cheap: the held
/// transformation sits behind a reference counter (`Rc` by default, `Arc`
/// with the `arc` feature) and clones share it.
///
/// # Type Parameters
///
/// * `In` - The input type of the transformation
/// * `Out` - The output type of the transformation
///
/// # Laws
///
/// Given a pure held transformation, calling [`apply`](Self::apply) any number
/// of times with the same input yields the same output. Purity is an
/// obligation of the caller, not something the type can enforce.
pub struct Function<In, Out> {
    transformation: SharedTransformation<In, Out>,
}

impl<In, Out> Function<In, Out> {
    /// Wraps a native transformation.
    ///
    /// The transformation is stored unchanged and is not validated. Partial
    /// transformations are accepted; their failures surface through
    /// [`apply`](Self::apply).
    ///
    /// # Arguments
    ///
    /// * `transformation` - The closure or function item to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use fnwrap::Function;
    ///
    /// fn double(value: i32) -> i32 { value * 2 }
    ///
    /// let from_item = Function::new(double);
    /// let from_closure = Function::new(|value: i32| value + 1);
    ///
    /// assert_eq!(from_item.apply(4), 8);
    /// assert_eq!(from_closure.apply(4), 5);
    /// ```
    #[inline]
    pub fn new<F>(transformation: F) -> Self
    where
        F: Fn(In) -> Out + Shareable,
    {
        Self {
            transformation: ReferenceCounter::new(transformation),
        }
    }

    /// Invokes the held transformation with `input`.
    ///
    /// This has no side effects beyond those of the held transformation.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnwrap::Function;
    ///
    /// let negate = Function::new(|value: i32| -value);
    /// assert_eq!(negate.apply(3), -3);
    /// ```
    #[inline]
    pub fn apply(&self, input: In) -> Out {
        (self.transformation)(input)
    }

    /// Converts this `Function` into a plain closure.
    ///
    /// Useful where an API expects `impl Fn`, such as iterator adapters.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnwrap::Function;
    ///
    /// let square = Function::new(|value: i32| value * value);
    /// let squares: Vec<i32> = vec![1, 2, 3].into_iter().map(square.into_closure()).collect();
    /// assert_eq!(squares, vec![1, 4, 9]);
    /// ```
    pub fn into_closure(self) -> impl Fn(In) -> Out {
        move |input| self.apply(input)
    }
}

impl<T: 'static> Function<T, T> {
    /// Returns a `Function` that hands back its input unchanged.
    ///
    /// This is the unit of [`pipe`](Self::pipe) and [`compose`](Self::compose).
    ///
    /// # Examples
    ///
    /// ```
    /// use fnwrap::Function;
    ///
    /// let identity = Function::<String, String>::identity();
    /// assert_eq!(identity.apply("unchanged".to_string()), "unchanged");
    /// ```
    pub fn identity() -> Self {
        trace_combinator!("identity", T);
        Self::new(|value| value)
    }
}

impl<In: 'static, Out: Clone + Shareable> Function<In, Out> {
    /// Returns a `Function` that ignores its input and always yields `value`.
    ///
    /// The input type is free, so the same constant can be used wherever
    /// any `Function<In, Out>` is expected.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnwrap::Function;
    ///
    /// let always_five = Function::<&str, i32>::constant(5);
    /// assert_eq!(always_five.apply("ignored"), 5);
    ///
    /// let always_five_from_unit = Function::<(), i32>::constant(5);
    /// assert_eq!(always_five_from_unit.apply(()), 5);
    /// ```
    pub fn constant(value: Out) -> Self {
        trace_combinator!("constant", In, Out);
        Self::new(move |_| value.clone())
    }
}

impl<In, Out> Clone for Function<In, Out> {
    fn clone(&self) -> Self {
        Self {
            transformation: ReferenceCounter::clone(&self.transformation),
        }
    }
}

impl<In, Out> fmt::Debug for Function<In, Out> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("input", &type_name::<In>())
            .field("output", &type_name::<Out>())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// IntoFunction
// =============================================================================

/// Conversion into a [`Function`].
///
/// Every combinator accepts `impl IntoFunction`, so a `Function` and a native
/// closure can be mixed freely. Implemented for `Function` itself (as a no-op)
/// and for every `Fn(In) -> Out` closure or function item that satisfies
/// [`Shareable`].
///
/// Closures passed through this trait need annotated parameter types, since
/// the compiler cannot infer a closure signature from a non-`Fn` bound.
///
/// # Examples
///
/// ```
/// use fnwrap::{Function, IntoFunction};
///
/// let from_closure: Function<i32, i32> = (|value: i32| value + 1).into_function();
/// let from_function = Function::new(|value: i32| value * 2).into_function();
///
/// assert_eq!(from_closure.apply(1), 2);
/// assert_eq!(from_function.apply(1), 2);
/// ```
pub trait IntoFunction<In, Out> {
    /// Performs the conversion.
    fn into_function(self) -> Function<In, Out>;
}

impl<In, Out> IntoFunction<In, Out> for Function<In, Out> {
    #[inline]
    fn into_function(self) -> Self {
        self
    }
}

impl<In, Out, F> IntoFunction<In, Out> for F
where
    F: Fn(In) -> Out + Shareable,
{
    #[inline]
    fn into_function(self) -> Function<In, Out> {
        Function::new(self)
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Function<i32, String>: Send, Sync, Clone);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Function<i32, String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(3, 6)]
    #[case(-4, -8)]
    fn test_apply_invokes_held_transformation(#[case] input: i32, #[case] expected: i32) {
        let double = Function::new(|value: i32| value * 2);
        assert_eq!(double.apply(input), expected);
    }

    #[rstest]
    fn test_clone_shares_transformation() {
        let function = Function::new(|value: i32| value + 1);
        let cloned = function.clone();

        assert!(ReferenceCounter::ptr_eq(
            &function.transformation,
            &cloned.transformation
        ));
        assert_eq!(function.apply(1), cloned.apply(1));
    }

    #[rstest]
    fn test_debug_names_types() {
        let function = Function::new(|value: i32| value.to_string());
        let rendered = format!("{function:?}");

        assert!(rendered.starts_with("Function"));
        assert!(rendered.contains("i32"));
        assert!(rendered.contains("String"));
    }

    #[rstest]
    fn test_constant_ignores_input_type() {
        let from_string = Function::<String, u8>::constant(7);
        let from_vector = Function::<Vec<i32>, u8>::constant(7);

        assert_eq!(from_string.apply("anything".to_string()), 7);
        assert_eq!(from_vector.apply(vec![1, 2, 3]), 7);
    }

    #[rstest]
    fn test_into_function_is_noop_for_function() {
        let function = Function::new(|value: i32| value - 1);
        let converted = function.clone().into_function();

        assert!(ReferenceCounter::ptr_eq(
            &function.transformation,
            &converted.transformation
        ));
    }
}
