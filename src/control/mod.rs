//! Non-strict evaluation.
//!
//! - [`Lazy`]: A function call that has not happened yet, with its cached outcome
//! - [`Outcome`]: The produced values or the captured failure of an evaluation
//! - [`EvaluationError`]: The error [`Lazy::force`] returns for a failed cell
//!
//! # Examples
//!
//! ## Deferring a fallible call
//!
//! ```rust
//! use nonstrict::control::lazy;
//!
//! let port = lazy(|text: &str| text.parse::<u16>(), "8080");
//! // Nothing parsed yet.
//! assert!(!port.is_evaluated());
//!
//! assert_eq!(port.force().map(|values| values[0]).ok(), Some(8080));
//! ```
//!
//! ## Running a side effect once
//!
//! ```rust
//! use nonstrict::control::lazy_nullary_effect;
//! use std::cell::RefCell;
//!
//! let journal = RefCell::new(Vec::new());
//! let init = lazy_nullary_effect(|| {
//!     journal.borrow_mut().push("initialized");
//!     Ok::<_, String>(())
//! });
//!
//! init.evaluate();
//! init.evaluate();
//! assert_eq!(*journal.borrow(), ["initialized"]);
//! ```

mod error;
mod lazy;
mod outcome;

pub use error::EvaluationError;
pub use lazy::{
    Iter, Lazy, lazy, lazy_effect, lazy_many, lazy_nullary, lazy_nullary_effect, lazy_tupled,
};
pub use outcome::{Outcome, Results};
