//! Argument-order combinators.

/// Swaps the arguments of a binary function.
///
/// Given `function(u, v)`, returns `g` such that `g(v, u) = function(u, v)`.
/// Useful before [`partial`](crate::compose::partial) when the argument you
/// want to fix comes second.
///
/// # Laws
///
/// - **Swap definition**: `swap(f)(v, u) == f(u, v)`
/// - **Double swap identity**: `swap(swap(f)) == f`
///
/// # Type Parameters
///
/// * `U` - The type of the first argument of the original function
/// * `V` - The type of the second argument of the original function
/// * `R` - The return type of the function
/// * `F` - The function type
///
/// # Examples
///
/// ```
/// use nonstrict::compose::swap;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let divide_into = swap(divide);
///
/// // divide_into(2.0, 10.0) = divide(10.0, 2.0)
/// assert_eq!(divide_into(2.0, 10.0), 5.0);
/// ```
///
/// Fixing the second argument:
///
/// ```
/// use nonstrict::compose::{partial, swap};
///
/// fn power(base: i32, exponent: u32) -> i32 { base.pow(exponent) }
///
/// let square = partial(swap(power), 2);
/// assert_eq!(square((7,)), 49);
/// ```
#[inline]
pub fn swap<U, V, R, F>(function: F) -> impl Fn(V, U) -> R
where
    F: Fn(U, V) -> R,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}
