//! Tuple-ization of functions.
//!
//! Rust closures have a fixed arity, so "a function taking its arguments as a
//! single ordered bundle" is expressed with tuples: an N-argument function is
//! adapted into a function of one N-tuple. Implementations cover arities 0
//! through 6. Supplying a tuple of the wrong length does not type-check, so
//! there is no runtime arity failure.

/// A function that can be called with all of its arguments packed in a tuple.
///
/// Implemented for every [`Fn`] of arity 0 to 6, where `Args` is the tuple of
/// its parameter types (`()` for nullary functions, `(A,)` for unary ones).
///
/// # Examples
///
/// ```
/// use nonstrict::compose::TupledFn;
///
/// fn volume(width: u32, height: u32, depth: u32) -> u32 { width * height * depth }
///
/// assert_eq!(volume.call_tupled((2, 3, 4)), 24);
/// ```
pub trait TupledFn<Args> {
    /// The return type of the underlying function.
    type Output;

    /// Calls the function, spreading `arguments` into positional parameters.
    fn call_tupled(&self, arguments: Args) -> Self::Output;
}

/// A tuple that can be extended at the front.
///
/// Used by [`partial`](crate::compose::partial) to rebuild the full argument
/// tuple from the bound first argument and the remaining ones.
///
/// # Examples
///
/// ```
/// use nonstrict::compose::Prepend;
///
/// assert_eq!((2, "three").prepend(1), (1, 2, "three"));
/// assert_eq!(().prepend('a'), ('a',));
/// ```
pub trait Prepend<Head> {
    /// The tuple with `Head` as its first element.
    type Output;

    /// Returns a new tuple starting with `head` followed by `self`'s elements.
    fn prepend(self, head: Head) -> Self::Output;
}

macro_rules! impl_tupled_fn {
    ($($argument:ident),*) => {
        impl<Function, R, $($argument),*> TupledFn<($($argument,)*)> for Function
        where
            Function: Fn($($argument),*) -> R,
        {
            type Output = R;

            #[inline]
            #[allow(non_snake_case)]
            fn call_tupled(&self, ($($argument,)*): ($($argument,)*)) -> R {
                self($($argument),*)
            }
        }
    };
}

impl_tupled_fn!();
impl_tupled_fn!(A1);
impl_tupled_fn!(A1, A2);
impl_tupled_fn!(A1, A2, A3);
impl_tupled_fn!(A1, A2, A3, A4);
impl_tupled_fn!(A1, A2, A3, A4, A5);
impl_tupled_fn!(A1, A2, A3, A4, A5, A6);

macro_rules! impl_prepend {
    ($($element:ident),*) => {
        impl<Head, $($element),*> Prepend<Head> for ($($element,)*) {
            type Output = (Head, $($element,)*);

            #[inline]
            #[allow(non_snake_case)]
            fn prepend(self, head: Head) -> Self::Output {
                let ($($element,)*) = self;
                (head, $($element,)*)
            }
        }
    };
}

impl_prepend!();
impl_prepend!(A2);
impl_prepend!(A2, A3);
impl_prepend!(A2, A3, A4);
impl_prepend!(A2, A3, A4, A5);
impl_prepend!(A2, A3, A4, A5, A6);

/// Converts a function of N positional arguments into a function taking one
/// N-tuple.
///
/// `entuple(f)((a1, ..., aN)) == f(a1, ..., aN)` for `0 <= N <= 6`.
///
/// # Type Parameters
///
/// * `Args` - The tuple of the function's parameter types
/// * `F` - The function type
///
/// # Examples
///
/// ```
/// use nonstrict::compose::entuple;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_pair = entuple(add);
/// let pairs = vec![(1, 2), (3, 4)];
/// let sums: Vec<i32> = pairs.into_iter().map(add_pair).collect();
/// assert_eq!(sums, vec![3, 7]);
/// ```
///
/// Nullary functions take the unit tuple:
///
/// ```
/// use nonstrict::compose::entuple;
///
/// let answer = entuple(|| 42);
/// assert_eq!(answer(()), 42);
/// ```
#[inline]
pub fn entuple<Args, F>(function: F) -> impl Fn(Args) -> F::Output
where
    F: TupledFn<Args>,
{
    move |arguments| function.call_tupled(arguments)
}
