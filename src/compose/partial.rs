//! Partial application of a leading argument.

use super::tuple::{Prepend, TupledFn, entuple};

/// Fixes the first argument of a function.
///
/// Given `function(a, b, ...)` of arity `1..=6` and a value for `a`, returns a
/// function of the remaining arguments, packed as a tuple:
///
/// ```text
/// partial(f, a)((b, c)) = f(a, b, c)
/// ```
///
/// The function is tuple-ized with [`entuple`] and the returned closure
/// prepends a clone of `first` to each remaining-argument tuple it receives,
/// so it can be called any number of times. Whatever `function` returns,
/// including an `Err`, reaches the caller unchanged.
///
/// # Type Requirements
///
/// - `first` must implement [`Clone`]
/// - The remaining-argument tuple is `()` for a unary function
///
/// # Examples
///
/// ```
/// use nonstrict::compose::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_three = partial(add, 3);
/// assert_eq!(add_three((4,)), 7);
/// assert_eq!(add_three((10,)), 13);
/// ```
///
/// Binding leaves a thunk when only one argument was expected:
///
/// ```
/// use nonstrict::compose::partial;
///
/// let shout = partial(|text: &str| text.to_uppercase(), "hey");
/// assert_eq!(shout(()), "HEY");
/// ```
///
/// Partial applications compose:
///
/// ```
/// use nonstrict::compose::partial;
///
/// fn between(low: i32, high: i32, value: i32) -> bool { low <= value && value <= high }
///
/// let at_least_zero = partial(between, 0);
/// assert!(at_least_zero((10, 5)));
///
/// let digit = partial(|high: i32, value: i32| between(0, high, value), 9);
/// assert!(digit((7,)));
/// assert!(!digit((12,)));
/// ```
#[inline]
pub fn partial<First, Rest, F>(
    function: F,
    first: First,
) -> impl Fn(Rest) -> <F as TupledFn<<Rest as Prepend<First>>::Output>>::Output
where
    First: Clone,
    Rest: Prepend<First>,
    F: TupledFn<<Rest as Prepend<First>>::Output>,
{
    let tupled = entuple(function);
    move |rest: Rest| tupled(rest.prepend(first.clone()))
}
