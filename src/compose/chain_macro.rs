//! The `chain!` macro for short-circuit composition over `Option`.

/// Chains `Option`-returning functions from left to right.
///
/// `chain!(f, g, h).apply(x)` is equivalent to
/// `f(x).and_then(g).and_then(h)`: evaluation stops at the first `None`, and
/// no later step is invoked.
///
/// # Syntax
///
/// - `chain!(f)` - Returns `f` as a `Function`
/// - `chain!(f, g)` - Returns `f.chain(g)`
/// - `chain!(f, g, h, ...)` - Returns `f.chain(g).chain(h)...`
///
/// # Examples
///
/// ```
/// use fnwrap::chain;
///
/// fn parse(text: &'static str) -> Option<i32> { text.parse().ok() }
/// fn positive(value: i32) -> Option<i32> { (value > 0).then_some(value) }
/// fn halve(value: i32) -> Option<i32> { (value % 2 == 0).then_some(value / 2) }
///
/// let parse_positive_half = chain!(parse, positive, halve);
///
/// assert_eq!(parse_positive_half.apply("10"), Some(5));
/// assert_eq!(parse_positive_half.apply("-10"), None);
/// assert_eq!(parse_positive_half.apply("7"), None);
/// assert_eq!(parse_positive_half.apply("ten"), None);
/// ```
#[macro_export]
macro_rules! chain {
    ($function:expr $(,)?) => {
        $crate::IntoFunction::into_function($function)
    };

    ($first_function:expr, $second_function:expr $(, $remaining_functions:expr)* $(,)?) => {
        $crate::chain!(
            $crate::IntoFunction::into_function($first_function).chain($second_function)
            $(, $remaining_functions)*
        )
    };
}
