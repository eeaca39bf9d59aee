//! Procedural macros for fnwrap.
//!
//! # Available Function-like Macros
//!
//! - [`curry!`]: Converts a multi-argument closure or function into a curried
//!   `fnwrap::Function` chain
//!
//! # Example: Currying
//!
//! ```rust,ignore
//! use fnwrap::curry;
//!
//! // Curry a closure
//! let add = curry!(|a: i32, b: i32| a + b);
//! assert_eq!(add.apply(5).apply(3), 8);
//!
//! // Partial application
//! let add_five = add.apply(5);
//! assert_eq!(add_five.apply(10), 15);
//! assert_eq!(add_five.apply(20), 25);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;

use proc_macro::TokenStream;

/// Converts a multi-argument closure into a curried `fnwrap::Function` chain.
///
/// Currying transforms a closure that takes multiple arguments into
/// a chain of single-argument `Function`s. The generated code adapts the
/// closure into a `Function` over its argument tuple and curries it with
/// `fnwrap::Curry`, so the result is identical to calling `.curry()` on a
/// tuple-input `Function`.
///
/// # Usage
///
/// ```rust,ignore
/// use fnwrap::curry;
///
/// // With a closure
/// let curried = curry!(|a: i32, b: i32| a + b);
/// assert_eq!(curried.apply(5).apply(3), 8);
///
/// // Partial application
/// let add_five = curried.apply(5);
/// assert_eq!(add_five.apply(10), 15);
/// assert_eq!(add_five.apply(20), 25);
/// ```
///
/// # Wrapping existing functions
///
/// Pass the function path together with its arity:
///
/// ```rust,ignore
/// use fnwrap::curry;
///
/// fn add(a: i32, b: i32) -> i32 { a + b }
///
/// let curried = curry!(add, 2);
/// assert_eq!(curried.apply(5).apply(3), 8);
/// ```
///
/// # Multi-argument closures
///
/// The macro supports closures with 2 to 8 arguments:
///
/// ```rust,ignore
/// use fnwrap::curry;
///
/// // 3 arguments
/// let curried = curry!(|a: i32, b: i32, c: i32| a + b + c);
/// assert_eq!(curried.apply(1).apply(2).apply(3), 6);
///
/// // 6 arguments
/// let curried = curry!(|a: i32, b: i32, c: i32, d: i32, e: i32, f: i32| {
///     a + b + c + d + e + f
/// });
/// assert_eq!(curried.apply(1).apply(2).apply(3).apply(4).apply(5).apply(6), 21);
/// ```
///
/// # Type constraints
///
/// - **Arguments (except the last)**: Must implement `Clone`
/// - **Last argument**: No special constraints
///
/// Partial applications are reusable, so every argument that is captured by
/// one is cloned on each further application.
///
/// ```rust,ignore
/// struct NonClone(i32);
///
/// // OK: NonClone as last argument
/// let curried = curry!(|a: i32, b: NonClone| a + b.0);
///
/// // Error: NonClone as non-last argument (Clone required)
/// // let curried = curry!(|a: NonClone, b: i32| a.0 + b);
/// ```
///
/// # Errors
///
/// Expands to a compile error when the input is neither a closure nor a path
/// with an integer arity, or when the arity is outside 2 to 8.
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::curry_impl(input)
}
