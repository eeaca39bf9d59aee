//! The `concatenate!` macro for sequencing endomorphisms.

/// Sequences functions of type `T -> T` from left to right.
///
/// Each argument may be a [`Function`](crate::Function) or a closure; they
/// are lifted with [`IntoFunction`](crate::IntoFunction) and handed to
/// [`Function::concatenate`](crate::Function::concatenate). An optional
/// `finally` step runs after all the others.
///
/// # Syntax
///
/// - `concatenate!(f, g, h)` - Runs `f`, then `g`, then `h`
/// - `concatenate!(f, g; finally = h)` - Runs `f`, `g`, then the `finally` step `h`
///
/// # Examples
///
/// ```
/// use fnwrap::concatenate;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(concatenate!(add_one, double).apply(3), 8); // 3 -> 4 -> 8
/// assert_eq!(concatenate!(add_one; finally = double).apply(3), 8);
/// assert_eq!(concatenate!(double, add_one; finally = double).apply(3), 14);
/// ```
#[macro_export]
macro_rules! concatenate {
    ($($function:expr),+ ; finally = $finally:expr $(,)?) => {
        $crate::Function::concatenate_then(
            [$($crate::IntoFunction::into_function($function)),+],
            $finally,
        )
    };

    ($($function:expr),+ $(,)?) => {
        $crate::Function::concatenate([$($crate::IntoFunction::into_function($function)),+])
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_concatenate_mixed_steps() {
        let trim = crate::Function::new(|text: String| text.trim().to_string());
        let reverse = |text: String| text.chars().rev().collect::<String>();

        let concatenated = concatenate!(trim, reverse; finally = |text: String| text + "!");
        assert_eq!(concatenated.apply("  abc ".to_string()), "cba!");
    }
}
