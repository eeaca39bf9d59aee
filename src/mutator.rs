//! In-place update adapter for endomorphic functions.
//!
//! [`Mutator<T>`] wraps a callback that receives `&mut T`. It is the one place
//! in this crate with an observable side effect: a mutation of a binding the
//! caller owns. Keeping it a distinct type makes that side effect visible in
//! signatures instead of hiding it behind a pure-looking `Function`.
//!
//! # Examples
//!
//! ```
//! use fnwrap::Function;
//!
//! let add_one = Function::new(|value: i32| value + 1);
//! let increment = add_one.to_mutator();
//!
//! let mut counter = 41;
//! increment.mutate(&mut counter);
//! assert_eq!(counter, 42);
//! ```

use std::fmt;

use crate::function::{Function, ReferenceCounter, Shareable, SharedCallback};

/// An adapter that updates a binding in place.
///
/// Cloning is cheap and shares the callback.
pub struct Mutator<T> {
    callback: SharedCallback<T>,
}

impl<T> Mutator<T> {
    /// Wraps an in-place update callback.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnwrap::Mutator;
    ///
    /// let push_zero = Mutator::new(|values: &mut Vec<i32>| values.push(0));
    ///
    /// let mut values = vec![1];
    /// push_zero.mutate(&mut values);
    /// assert_eq!(values, vec![1, 0]);
    /// ```
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&mut T) + Shareable,
    {
        Self {
            callback: ReferenceCounter::new(callback),
        }
    }

    /// Runs the callback against `target`.
    pub fn mutate(&self, target: &mut T) {
        (self.callback)(target);
    }
}

impl<T: 'static> Mutator<T> {
    /// Runs `self`, then `next`, against the same binding.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnwrap::Mutator;
    ///
    /// let double = Mutator::new(|value: &mut i32| *value *= 2);
    /// let add_three = Mutator::new(|value: &mut i32| *value += 3);
    ///
    /// let mut value = 5;
    /// double.then(add_three).mutate(&mut value);
    /// assert_eq!(value, 13);
    /// ```
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        trace_combinator!("mutator_then", T);
        Self::new(move |target: &mut T| {
            self.mutate(target);
            next.mutate(target);
        })
    }

    /// Converts this mutator back into a pure `Function<T, T>`.
    ///
    /// The returned function takes ownership of its input, mutates it, and
    /// returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnwrap::Mutator;
    ///
    /// let sort = Mutator::new(|values: &mut Vec<i32>| values.sort_unstable());
    /// let sorted = sort.into_function();
    ///
    /// assert_eq!(sorted.apply(vec![3, 1, 2]), vec![1, 2, 3]);
    /// ```
    pub fn into_function(self) -> Function<T, T> {
        trace_combinator!("mutator_into_function", T);
        Function::new(move |mut value: T| {
            self.mutate(&mut value);
            value
        })
    }
}

impl<T> Clone for Mutator<T> {
    fn clone(&self) -> Self {
        Self {
            callback: ReferenceCounter::clone(&self.callback),
        }
    }
}

impl<T> fmt::Debug for Mutator<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Mutator")
            .field("target", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T: Clone + 'static> Function<T, T> {
    /// Turns this endomorphism into an in-place update adapter.
    ///
    /// [`Mutator::mutate`] reads the binding (by cloning it), applies this
    /// function, then writes the result back with a single assignment. If the
    /// function panics, the binding is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnwrap::Function;
    ///
    /// let shout = Function::new(|text: String| text.to_uppercase()).to_mutator();
    ///
    /// let mut greeting = String::from("hello");
    /// shout.mutate(&mut greeting);
    /// assert_eq!(greeting, "HELLO");
    /// ```
    pub fn to_mutator(self) -> Mutator<T> {
        trace_combinator!("to_mutator", T);
        Mutator::new(move |target: &mut T| {
            let updated = self.apply(target.clone());
            *target = updated;
        })
    }
}
