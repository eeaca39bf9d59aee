//! The `composition!` macro for function composition.
//!
//! This module provides the [`composition!`] macro which composes functions
//! from right to left, following the mathematical notation for function composition.

/// Composes functions from right to left into a single [`Function`](crate::Function).
///
/// `composition!(f, g, h).apply(x)` is equivalent to `f(g(h(x)))`.
///
/// This follows the mathematical convention where function composition reads
/// right-to-left: the rightmost function is applied first.
///
/// # Laws
///
/// The composition operation satisfies the following laws:
///
/// - **Associativity**: `composition!(f, composition!(g, h)) == composition!(composition!(f, g), h)`
/// - **Left Identity**: `composition!(Function::identity(), f) == f`
/// - **Right Identity**: `composition!(f, Function::identity()) == f`
///
/// # Syntax
///
/// - `composition!(f)` - Returns `f` as a `Function`
/// - `composition!(f, g)` - Returns `f.compose(g)`
/// - `composition!(f, g, h)` - Returns `f.compose(g.compose(h))`
/// - `composition!(f, g, h, ...)` - Composes any number of functions
///
/// # Examples
///
/// ## Three-function composition
///
/// ```
/// use fnwrap::composition;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // composition!(f, g, h)(x) = f(g(h(x)))
/// // = add_one(double(square(3))) = add_one(double(9)) = add_one(18) = 19
/// let composed = composition!(add_one, double, square);
/// assert_eq!(composed.apply(3), 19);
/// ```
///
/// ## With closures capturing environment
///
/// ```
/// use fnwrap::composition;
///
/// let multiplier = 3;
/// let multiply = move |x: i32| x * multiplier;
/// let add_ten = |x: i32| x + 10;
///
/// let composed = composition!(add_ten, multiply);
/// assert_eq!(composed.apply(5), 25); // add_ten(multiply(5)) = add_ten(15) = 25
/// ```
///
/// ## Verifying associativity
///
/// ```
/// use fnwrap::composition;
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// let left = composition!(f, composition!(g, h));
/// let right = composition!(composition!(f, g), h);
///
/// assert_eq!(left.apply(10), right.apply(10));
/// ```
#[macro_export]
macro_rules! composition {
    // Single function: lift it into a Function
    ($function:expr $(,)?) => {
        $crate::IntoFunction::into_function($function)
    };

    // Two or more functions: recursive composition
    // composition!(f, g, h, ...) = f.compose(composition!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::IntoFunction::into_function($outer_function)
            .compose($crate::composition!($($remaining_functions),+))
    };
}
