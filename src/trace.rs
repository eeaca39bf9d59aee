//! Construction-time trace events.
//!
//! With the `tracing` feature, building a derived combinator emits a
//! `TRACE` event under the `fnwrap` target naming the operation and the types
//! involved. Without the feature the macro expands to nothing. `apply` is
//! never instrumented.

#[cfg(feature = "tracing")]
macro_rules! trace_combinator {
    ($operation:literal $(, $type:ty)+ $(,)?) => {
        ::tracing::trace!(
            target: "fnwrap",
            operation = $operation,
            types = ?[$(::std::any::type_name::<$type>()),+],
            "building combinator"
        )
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_combinator {
    ($operation:literal $(, $type:ty)+ $(,)?) => {};
}
