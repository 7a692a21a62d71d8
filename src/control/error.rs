//! Error type for forced lazy evaluation.

use std::fmt;
use std::rc::Rc;

/// Returned by [`Lazy::force`](crate::control::Lazy::force) when the cached
/// outcome is a failure.
///
/// It wraps the error captured from the lazily called function, so callers can
/// tell "forcing the cell failed" apart from errors of their own. The captured
/// error is reachable through [`inner`](Self::inner) and
/// [`std::error::Error::source`].
///
/// # Examples
///
/// ```rust
/// use nonstrict::control::lazy;
/// use std::num::ParseIntError;
///
/// let cell = lazy(|text: &str| text.parse::<i32>(), "forty-two");
///
/// let error = cell.force().unwrap_err();
/// assert!(error.to_string().starts_with("lazy evaluation failed: "));
/// let _: &ParseIntError = error.inner();
/// ```
pub struct EvaluationError<E> {
    failure: Rc<E>,
}

impl<E> EvaluationError<E> {
    pub(crate) const fn new(failure: Rc<E>) -> Self {
        Self { failure }
    }

    /// Returns the error captured from the wrapped function.
    #[inline]
    #[must_use]
    pub fn inner(&self) -> &E {
        &self.failure
    }

    /// Returns the shared handle to the captured error.
    ///
    /// This is the same allocation [`Lazy::failure`](crate::control::Lazy::failure)
    /// hands out.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Rc<E> {
        self.failure
    }
}

impl<E> Clone for EvaluationError<E> {
    fn clone(&self) -> Self {
        Self::new(Rc::clone(&self.failure))
    }
}

impl<E: PartialEq> PartialEq for EvaluationError<E> {
    fn eq(&self, other: &Self) -> bool {
        self.failure == other.failure
    }
}

impl<E: fmt::Debug> fmt::Debug for EvaluationError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("EvaluationError")
            .field("failure", &self.failure)
            .finish()
    }
}

impl<E: fmt::Display> fmt::Display for EvaluationError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "lazy evaluation failed: {}", self.failure)
    }
}

impl<E: std::error::Error + 'static> std::error::Error for EvaluationError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.failure)
    }
}
