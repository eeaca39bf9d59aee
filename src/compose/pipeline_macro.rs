//! The `pipeline!` macro for left-to-right composition.
//!
//! This module provides the [`pipeline!`] macro which folds
//! [`Function::pipe`](crate::Function::pipe) across any number of steps.

/// Composes functions from left to right into a single [`Function`](crate::Function).
///
/// `pipeline!(f, g, h).apply(x)` is equivalent to `h(g(f(x)))`.
///
/// This is the "data flow" style of composition, where the value flows
/// through transformations in the order they are written.
///
/// # Relationship with composition!
///
/// `pipeline!(f, g, h)` is equivalent to `composition!(h, g, f)`.
///
/// # Syntax
///
/// - `pipeline!(f)` - Returns `f` as a `Function`
/// - `pipeline!(f, g)` - Returns `f.pipe(g)`
/// - `pipeline!(f, g, h, ...)` - Returns `f.pipe(g).pipe(h)...`
///
/// # Type Requirements
///
/// Each step is a [`Function`](crate::Function) or anything implementing
/// [`IntoFunction`](crate::IntoFunction). Closures need annotated parameter
/// types. The output type of each step must match the input type of the next.
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use fnwrap::pipeline;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // pipeline!(f, g)(x) = g(f(x)) = add_one(double(5)) = add_one(10) = 11
/// let pipelined = pipeline!(double, add_one);
/// assert_eq!(pipelined.apply(5), 11);
/// ```
///
/// ## Multi-step pipeline
///
/// ```
/// use fnwrap::pipeline;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // 3 -> square(3)=9 -> double(9)=18 -> add_one(18)=19
/// let pipelined = pipeline!(square, double, add_one);
/// assert_eq!(pipelined.apply(3), 19);
/// ```
///
/// ## Type conversion through pipeline
///
/// ```
/// use fnwrap::{Function, pipeline};
///
/// let to_string = Function::new(|x: i32| x.to_string());
/// let get_length = |s: String| s.len();
///
/// let pipelined = pipeline!(to_string, get_length);
/// assert_eq!(pipelined.apply(12345), 5);
/// ```
///
/// ## Equivalence with composition
///
/// ```
/// use fnwrap::{composition, pipeline};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// assert_eq!(pipeline!(f, g, h).apply(10), composition!(h, g, f).apply(10));
/// ```
#[macro_export]
macro_rules! pipeline {
    // Single function: lift it into a Function
    ($function:expr $(,)?) => {
        $crate::IntoFunction::into_function($function)
    };

    // Two or more functions: fold pipe left to right
    // pipeline!(f, g, h, ...) = pipeline!(f.pipe(g), h, ...)
    ($first_function:expr, $second_function:expr $(, $remaining_functions:expr)* $(,)?) => {
        $crate::pipeline!(
            $crate::IntoFunction::into_function($first_function).pipe($second_function)
            $(, $remaining_functions)*
        )
    };
}
