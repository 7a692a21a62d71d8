//! Function-shape adapters.
//!
//! Stateless transformations of callables. None of them has a failure mode of
//! its own: whatever the wrapped function returns (including an `Err`) is
//! passed through unchanged.
//!
//! - [`swap`]: Swaps the two arguments of a binary function
//! - [`entuple`]: Turns an N-argument function into one taking an N-tuple
//! - [`partial`]: Fixes the first argument, leaving a function of the rest
//!
//! # Examples
//!
//! ## Swapping arguments
//!
//! ```
//! use nonstrict::compose::swap;
//!
//! fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
//!
//! let swapped = swap(subtract);
//! assert_eq!(swapped(3, 10), 7);
//! ```
//!
//! ## Tuple-ization
//!
//! ```
//! use nonstrict::compose::entuple;
//!
//! let sum = entuple(|first: i32, second: i32, third: i32| first + second + third);
//! assert_eq!(sum((1, 2, 3)), 6);
//! ```
//!
//! ## Partial Application
//!
//! ```
//! use nonstrict::compose::partial;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let add_three = partial(add, 3);
//! assert_eq!(add_three((4,)), 7);
//! ```
//!
//! # Laws
//!
//! - **Swap definition**: `swap(f)(v, u) == f(u, v)`
//! - **Double swap identity**: `swap(swap(f)) == f`
//! - **Entuple definition**: `entuple(f)((a1, ..., aN)) == f(a1, ..., aN)`
//! - **Partial definition**: `partial(f, a)((b, ...)) == f(a, b, ...)`

mod partial;
mod tuple;
mod utils;

pub use partial::partial;
pub use tuple::{Prepend, TupledFn, entuple};
pub use utils::swap;
