//! Outcome type - the result of a finished lazy evaluation.
//!
//! An [`Outcome<R, E>`] is exactly one of:
//!
//! - `Success(values)`: the function returned normally; `values` is the ordered
//!   sequence of what it produced (empty for side-effect-only functions, a
//!   single element for ordinary ones, several for multi-result functions)
//! - `Failure(error)`: the function returned an error
//!
//! # Examples
//!
//! ```rust
//! use nonstrict::control::{Outcome, Results};
//!
//! let parsed: Outcome<i32, String> = "42".parse::<i32>()
//!     .map(|value| Results::from_buf([value]))
//!     .map_err(|error| error.to_string())
//!     .into();
//!
//! assert!(parsed.is_success());
//! assert_eq!(parsed.success_ref(), Some(&[42][..]));
//! ```

use std::fmt;

use smallvec::SmallVec;

/// The ordered sequence of values produced by a successful evaluation.
///
/// Single results, the common case, are stored inline without allocating.
pub type Results<R> = SmallVec<[R; 1]>;

/// The outcome of an evaluation: produced values or a captured failure.
///
/// # Type Parameters
///
/// * `R` - The type of each produced value
/// * `E` - The type of the failure
///
/// # Examples
///
/// ```rust
/// use nonstrict::control::{Outcome, Results};
///
/// let outcome: Outcome<i32, String> = Outcome::Success(Results::from_buf([21]));
/// let doubled = outcome.map(|value| value * 2);
/// assert_eq!(doubled.success_ref(), Some(&[42][..]));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<R, E> {
    /// The function returned; holds the produced values in order.
    Success(Results<R>),
    /// The function failed; holds the captured error.
    Failure(E),
}

impl<R, E> Outcome<R, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nonstrict::control::{Outcome, Results};
    ///
    /// let success: Outcome<(), &str> = Outcome::Success(Results::new());
    /// assert!(success.is_success());
    ///
    /// let failure: Outcome<(), &str> = Outcome::Failure("boom");
    /// assert!(!failure.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts the outcome into its values, discarding a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nonstrict::control::{Outcome, Results};
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(Results::from_buf([7]));
    /// assert_eq!(success.success().map(|values| values.into_vec()), Some(vec![7]));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert_eq!(failure.success(), None);
    /// ```
    #[inline]
    pub fn success(self) -> Option<Results<R>> {
        match self {
            Self::Success(values) => Some(values),
            Self::Failure(_) => None,
        }
    }

    /// Converts the outcome into its failure, discarding any values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nonstrict::control::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Failure("boom");
    /// assert_eq!(failure.failure(), Some("boom"));
    /// ```
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns the produced values as a slice if this is a `Success`.
    #[inline]
    pub fn success_ref(&self) -> Option<&[R]> {
        match self {
            Self::Success(values) => Some(values.as_slice()),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure if this is a `Failure`.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to every produced value.
    ///
    /// A `Failure` is returned unchanged.
    #[inline]
    pub fn map<T, F>(self, function: F) -> Outcome<T, E>
    where
        F: FnMut(R) -> T,
    {
        match self {
            Self::Success(values) => Outcome::Success(values.into_iter().map(function).collect()),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a function to the failure.
    ///
    /// A `Success` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nonstrict::control::Outcome;
    ///
    /// let failure: Outcome<i32, i32> = Outcome::Failure(404);
    /// let described = failure.map_failure(|code| format!("status {code}"));
    /// assert_eq!(described.failure(), Some("status 404".to_string()));
    /// ```
    #[inline]
    pub fn map_failure<T, F>(self, function: F) -> Outcome<R, T>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(values) => Outcome::Success(values),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Eliminates the outcome by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nonstrict::control::{Outcome, Results};
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(Results::from_vec(vec![1, 2, 3]));
    /// let total = success.fold(|values| values.iter().sum::<i32>(), |_| -1);
    /// assert_eq!(total, 6);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, success_function: F, failure_function: G) -> T
    where
        F: FnOnce(Results<R>) -> T,
        G: FnOnce(E) -> T,
    {
        match self {
            Self::Success(values) => success_function(values),
            Self::Failure(error) => failure_function(error),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the failure as `Err` if this is a `Failure`.
    #[inline]
    pub fn into_result(self) -> Result<Results<R>, E> {
        self.into()
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<R: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<R, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(values) => formatter.debug_tuple("Success").field(values).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<R, E> From<Result<Results<R>, E>> for Outcome<R, E> {
    /// `Ok(values)` becomes `Success(values)`, `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<Results<R>, E>) -> Self {
        match result {
            Ok(values) => Self::Success(values),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<R, E> From<Outcome<R, E>> for Result<Results<R>, E> {
    #[inline]
    fn from(outcome: Outcome<R, E>) -> Self {
        match outcome {
            Outcome::Success(values) => Ok(values),
            Outcome::Failure(error) => Err(error),
        }
    }
}
