//! Shared-pointer aliases that switch with the `arc` feature.
//!
//! Without `arc`, held transformations live behind [`std::rc::Rc`] and a
//! [`Function`](super::Function) is neither `Send` nor `Sync`. With `arc`
//! they live behind [`std::sync::Arc`], every held transformation must be
//! `Send + Sync`, and so is every `Function`.

// =============================================================================
// Reference Counter Type Aliases
// =============================================================================

/// Reference-counted smart pointer type.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// Reference-counted pointer to a unary transformation.
#[cfg(feature = "arc")]
pub(crate) type SharedTransformation<In, Out> = std::sync::Arc<dyn Fn(In) -> Out + Send + Sync>;

#[cfg(not(feature = "arc"))]
pub(crate) type SharedTransformation<In, Out> = std::rc::Rc<dyn Fn(In) -> Out>;

/// Reference-counted pointer to an in-place update callback.
#[cfg(feature = "arc")]
pub(crate) type SharedCallback<T> = std::sync::Arc<dyn Fn(&mut T) + Send + Sync>;

#[cfg(not(feature = "arc"))]
pub(crate) type SharedCallback<T> = std::rc::Rc<dyn Fn(&mut T)>;

// =============================================================================
// Shareable
// =============================================================================

/// Bound required of every value captured by a combinator.
///
/// Without the `arc` feature this is just `'static`. With `arc` it is
/// `Send + Sync + 'static`, so that the resulting [`Function`](super::Function)
/// can cross threads.
///
/// The trait is blanket-implemented and never needs to be implemented by hand.
#[cfg(feature = "arc")]
pub trait Shareable: Send + Sync + 'static {}

#[cfg(feature = "arc")]
impl<T: Send + Sync + 'static> Shareable for T {}

/// Bound required of every value captured by a combinator.
///
/// Without the `arc` feature this is just `'static`. With `arc` it is
/// `Send + Sync + 'static`, so that the resulting [`Function`](super::Function)
/// can cross threads.
///
/// The trait is blanket-implemented and never needs to be implemented by hand.
#[cfg(not(feature = "arc"))]
pub trait Shareable: 'static {}

#[cfg(not(feature = "arc"))]
impl<T: 'static> Shareable for T {}
