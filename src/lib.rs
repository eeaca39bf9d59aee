//! # fnwrap
//!
//! A single-argument function wrapper with a library of combinators for
//! building new functions out of existing ones.
//!
//! ## Overview
//!
//! Everything revolves around [`Function<In, Out>`], an immutable, cheaply
//! cloneable wrapper around one transformation `In -> Out`. On top of it:
//!
//! - **Composition**: [`Function::pipe`], [`Function::compose`], [`pipeline!`], [`composition!`]
//! - **Endomorphisms**: [`Function::concatenate`], [`concatenate!`], [`Function::to_mutator`]
//! - **Optional chaining**: [`Function::chain`], [`chain!`], [`Function::try_chain`]
//! - **Currying**: [`Curry`], [`Uncurry`] for tuple inputs of arity 1 to 8, and the `curry!` macro
//! - **Flipping**: [`Function::flip_first_two_arguments`], [`Function::flip`]
//! - **Promotion**: [`Function::promote_input`], [`Function::promote_output`] between boxed native closures and `Function`
//!
//! No combinator catches, wraps, or logs failures: a panic inside a held
//! transformation reaches the caller of [`Function::apply`] unchanged.
//!
//! ## Feature Flags
//!
//! - `derive` (default): the `curry!` procedural macro
//! - `arc`: share transformations through `Arc` so that `Function` is `Send + Sync`
//! - `tracing`: emit `TRACE` events when combinators are built
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnwrap::prelude::*;
//!
//! let add = Function::new(|(left, right): (i32, i32)| left + right);
//! let add_ten = add.curry().apply(10);
//!
//! let describe = add_ten
//!     .pipe(|sum: i32| sum * 2)
//!     .pipe(|doubled: i32| format!("result: {doubled}"));
//!
//! assert_eq!(describe.apply(11), "result: 42");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

// Lets `::fnwrap` paths emitted by `curry!` resolve inside this crate.
extern crate self as fnwrap;

#[macro_use]
mod trace;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fnwrap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::*;
    pub use crate::curry::{Curry, Uncurry};
    pub use crate::function::{Function, IntoFunction, Shareable};
    pub use crate::mutator::Mutator;
    pub use crate::promote::{Native, Native1, Native2, Native3, Native4, Native5, Native6};

    #[cfg(feature = "derive")]
    pub use crate::curry;
}

pub mod compose;
pub mod curry;
pub mod function;
pub mod mutator;
pub mod promote;

pub use curry::{Curry, Uncurry};
pub use function::{Function, IntoFunction, Shareable};
pub use mutator::Mutator;
pub use promote::{Native, Native1, Native2, Native3, Native4, Native5, Native6};

/// Converts a multi-argument closure into a curried [`Function`] chain.
///
/// See the `fnwrap-derive` crate for the full documentation.
///
/// ```rust
/// use fnwrap::curry;
///
/// let add = curry!(|first: i32, second: i32| first + second);
/// let add_five = add.apply(5);
///
/// assert_eq!(add_five.apply(3), 8);
/// assert_eq!(add_five.apply(10), 15);
/// ```
#[cfg(feature = "derive")]
pub use fnwrap_derive::curry;
