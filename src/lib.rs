//! # nonstrict
//!
//! Small functional-programming tools for treating function calls as values.
//!
//! ## Overview
//!
//! - **Function shapes** ([`compose`]): [`swap`](compose::swap) the arguments of a
//!   binary function, [`entuple`](compose::entuple) a function so it takes its
//!   arguments as one tuple, and [`partial`](compose::partial)ly apply a leading
//!   argument.
//! - **Non-strict evaluation** ([`control`]): [`Lazy`](control::Lazy) holds a
//!   function together with its arguments and only calls it when the result is
//!   demanded, caching the [`Outcome`](control::Outcome) (result values or the
//!   captured error).
//!
//! ## Feature Flags
//!
//! - `compose`: Function-shape adapters
//! - `control`: The lazy evaluation cell and its outcome type
//! - `serde`: `Serialize`/`Deserialize` for [`Outcome`](control::Outcome)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use nonstrict::prelude::*;
//!
//! fn add_two_if_positive(value: i32) -> Result<i32, String> {
//!     if value < 1 {
//!         Err(format!("{value} is not positive"))
//!     } else {
//!         Ok(value + 2)
//!     }
//! }
//!
//! let cell = lazy(add_two_if_positive, 5);
//! assert!(!cell.is_evaluated());
//!
//! assert!(cell.evaluate());
//! assert_eq!(cell.result().as_deref(), Some(&[7][..]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use nonstrict::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;
