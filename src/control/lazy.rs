//! Non-strict function evaluation with cached outcomes.
//!
//! This module provides the [`Lazy<D, R, E, F>`] cell. A cell holds a function
//! together with the argument it will be called with, and calls it only when
//! the result is demanded. The [`Outcome`] of the call (the produced values, or
//! the error the function returned) is cached in the cell.
//!
//! A cell is *pure* by default: the function runs at most once and every later
//! request reuses the cached outcome, failures included. An *impure* cell calls
//! the function again on every [`evaluate`](Lazy::evaluate), overwriting the
//! previous outcome.
//!
//! # Constructors
//!
//! | constructor | function shape | produced values |
//! |---|---|---|
//! | [`lazy`] | `Fn(D) -> Result<R, E>` | one |
//! | [`lazy_nullary`] | `Fn() -> Result<R, E>` | one |
//! | [`lazy_effect`] | `Fn(D) -> Result<(), E>` | none |
//! | [`lazy_nullary_effect`] | `Fn() -> Result<(), E>` | none |
//! | [`lazy_tupled`] | `Fn(A1, ..., AN) -> Result<R, E>` | one |
//! | [`lazy_many`] | `Fn(D) -> Result<impl IntoIterator<Item = R>, E>` | any number |
//! | [`Lazy::new`] | `Fn(D) -> Result<Results<R>, E>` | as returned |
//!
//! # Examples
//!
//! ```rust
//! use nonstrict::control::lazy;
//!
//! fn add_two_if_positive(value: i32) -> Result<i32, String> {
//!     if value < 1 {
//!         return Err(format!("{value} is not positive"));
//!     }
//!     Ok(value + 2)
//! }
//!
//! let happy = lazy(add_two_if_positive, 5);
//! assert!(happy.evaluate());
//! assert_eq!(happy.result().as_deref(), Some(&[7][..]));
//!
//! let sad = lazy(add_two_if_positive, -42);
//! assert!(!sad.evaluate());
//! assert!(sad.result().is_none());
//! assert_eq!(sad.failure().as_deref(), Some(&"-42 is not positive".to_string()));
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use log::{debug, trace};

use super::error::EvaluationError;
use super::outcome::{Outcome, Results};
use crate::compose::{TupledFn, entuple};

/// The slot of a `Lazy` cell.
///
/// `Unevaluated` is not an [`Outcome`] variant: a cell that has
/// not run yet has neither values nor a failure.
#[derive(Debug)]
enum LazyState<R, E> {
    Unevaluated,
    Evaluated(Outcome<R, Rc<E>>),
}

/// A function call that has not happened yet, plus its eventual outcome.
///
/// # Type Parameters
///
/// * `D` - The argument bound to the call (a tuple for several arguments)
/// * `R` - The type of each produced value
/// * `E` - The error type of the function
/// * `F` - The function type, normalized to `Fn(D) -> Result<Results<R>, E>`
///
/// # Thread Safety
///
/// This type is NOT thread-safe: it is neither `Send` nor `Sync`. The cached
/// failure is shared through [`Rc`], so every query returns the same error.
///
/// # Panics
///
/// Evaluating an impure cell while a [`Ref`] returned by [`result`](Self::result)
/// or [`force`](Self::force) is still alive panics with a borrow error. A panic
/// in the wrapped function itself is not captured; it unwinds through
/// [`evaluate`](Self::evaluate) and leaves the cell in its previous state.
///
/// # Examples
///
/// ## Pure cells call the function once
///
/// ```rust
/// use nonstrict::control::lazy_nullary;
/// use std::cell::Cell;
/// use std::convert::Infallible;
///
/// let call_count = Cell::new(0);
/// let cell = lazy_nullary(|| {
///     call_count.set(call_count.get() + 1);
///     Ok::<_, Infallible>(42)
/// });
///
/// assert_eq!(call_count.get(), 0);
/// cell.evaluate();
/// cell.evaluate();
/// assert_eq!(call_count.get(), 1);
/// ```
///
/// ## Impure cells call it every time
///
/// ```rust
/// use nonstrict::control::lazy_nullary_effect;
/// use std::cell::Cell;
/// use std::convert::Infallible;
///
/// let counter = Cell::new(0);
/// let tick = lazy_nullary_effect(|| {
///     counter.set(counter.get() + 1);
///     Ok::<_, Infallible>(())
/// })
/// .impure();
///
/// for _ in 0..3 {
///     tick.evaluate();
/// }
/// assert_eq!(counter.get(), 3);
/// ```
pub struct Lazy<D, R, E, F> {
    function: F,
    argument: D,
    pure: bool,
    state: RefCell<LazyState<R, E>>,
}

static_assertions::assert_not_impl_any!(
    Lazy<i32, i32, String, fn(i32) -> Result<Results<i32>, String>>: Send, Sync
);

fn invoke<D, R, E, F>(function: &F, argument: D) -> Outcome<R, Rc<E>>
where
    F: Fn(D) -> Result<Results<R>, E>,
{
    trace!("invoking lazily bound function");
    match function(argument) {
        Ok(values) => {
            trace!("lazy evaluation produced {} value(s)", values.len());
            Outcome::Success(values)
        }
        Err(error) => {
            debug!("lazy evaluation failed; failure captured in cell");
            Outcome::Failure(Rc::new(error))
        }
    }
}

impl<D, R, E, F> Lazy<D, R, E, F>
where
    F: Fn(D) -> Result<Results<R>, E>,
{
    /// Creates a pure, unevaluated cell from a function that already returns
    /// its values as [`Results`].
    ///
    /// Nothing is evaluated here. The shape-specific constructors ([`lazy`],
    /// [`lazy_effect`], ...) all build on this one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nonstrict::control::{Lazy, Results};
    ///
    /// let divmod = Lazy::new(
    ///     |(dividend, divisor): (u32, u32)| {
    ///         if divisor == 0 {
    ///             return Err("division by zero");
    ///         }
    ///         Ok(Results::from_vec(vec![dividend / divisor, dividend % divisor]))
    ///     },
    ///     (17, 5),
    /// );
    /// assert_eq!(divmod.result().as_deref(), Some(&[3, 2][..]));
    /// ```
    #[inline]
    pub const fn new(function: F, argument: D) -> Self {
        Self {
            function,
            argument,
            pure: true,
            state: RefCell::new(LazyState::Unevaluated),
        }
    }
}

impl<D, R, E, F> Lazy<D, R, E, F> {
    /// Sets the purity flag.
    ///
    /// `true` (the default) evaluates once and caches forever; `false`
    /// re-evaluates on every [`evaluate`](Self::evaluate).
    #[inline]
    #[must_use]
    pub const fn with_purity(mut self, pure: bool) -> Self {
        self.pure = pure;
        self
    }

    /// Makes the cell impure. Shorthand for `with_purity(false)`.
    #[inline]
    #[must_use]
    pub const fn impure(self) -> Self {
        self.with_purity(false)
    }

    /// Returns the purity flag.
    #[inline]
    pub const fn is_pure(&self) -> bool {
        self.pure
    }

    /// Returns whether the cell has been evaluated, successfully or not.
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Evaluated(_))
    }

    /// Returns whether the cached outcome is a failure.
    ///
    /// `false` while the cell is unevaluated.
    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(
            &*self.state.borrow(),
            LazyState::Evaluated(Outcome::Failure(_))
        )
    }

    /// Returns whether the cached outcome is a success.
    ///
    /// `false` while the cell is unevaluated.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(
            &*self.state.borrow(),
            LazyState::Evaluated(Outcome::Success(_))
        )
    }

    /// Returns the cached outcome without evaluating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nonstrict::control::lazy;
    ///
    /// let cell = lazy(|value: u8| value.checked_mul(2).ok_or("overflow"), 200);
    /// assert!(cell.get().is_none());
    ///
    /// cell.evaluate();
    /// assert_eq!(cell.get().unwrap().failure_ref().map(|error| **error), Some("overflow"));
    /// ```
    pub fn get(&self) -> Option<Ref<'_, Outcome<R, Rc<E>>>> {
        Ref::filter_map(self.state.borrow(), |state| match state {
            LazyState::Evaluated(outcome) => Some(outcome),
            LazyState::Unevaluated => None,
        })
        .ok()
    }
}

impl<D, R, E, F> Lazy<D, R, E, F>
where
    D: Clone,
    F: Fn(D) -> Result<Results<R>, E>,
{
    /// Evaluates the function with its bound argument.
    ///
    /// A pure cell that already holds an outcome is left alone; otherwise the
    /// function is called and its outcome replaces the cached one. An error
    /// returned by the function is stored, never propagated.
    ///
    /// # Returns
    ///
    /// `true` if the cached outcome is now a success, `false` if it is a
    /// failure.
    ///
    /// # Panics
    ///
    /// The only way this panics (other than the function itself panicking) is
    /// re-evaluating an impure cell while a [`Ref`] from
    /// [`result`](Self::result) or [`force`](Self::force) is still alive: the
    /// new outcome cannot be stored while the old one is borrowed. Pure cells
    /// that are already evaluated never take that path.
    pub fn evaluate(&self) -> bool {
        if self.pure
            && let LazyState::Evaluated(outcome) = &*self.state.borrow()
        {
            trace!("pure lazy cell reusing cached outcome");
            return outcome.is_success();
        }

        let outcome = invoke(&self.function, self.argument.clone());
        let succeeded = outcome.is_success();
        *self.state.borrow_mut() = LazyState::Evaluated(outcome);
        succeeded
    }

    fn evaluate_if_unevaluated(&self) {
        if !self.is_evaluated() {
            self.evaluate();
        }
    }

    /// Returns the produced values, evaluating first if needed.
    ///
    /// `None` if the outcome is a failure. Never re-runs an already evaluated
    /// cell, even an impure one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nonstrict::control::lazy_effect;
    ///
    /// let log_line = lazy_effect(|line: &str| {
    ///     if line.is_empty() {
    ///         return Err("empty line");
    ///     }
    ///     Ok(())
    /// }, "started");
    ///
    /// // Side-effect-only functions succeed with no values.
    /// assert_eq!(log_line.result().map(|values| values.len()), Some(0));
    /// ```
    pub fn result(&self) -> Option<Ref<'_, [R]>> {
        self.evaluate_if_unevaluated();
        Ref::filter_map(self.state.borrow(), |state| match state {
            LazyState::Evaluated(Outcome::Success(values)) => Some(values.as_slice()),
            _ => None,
        })
        .ok()
    }

    /// Returns the captured failure, evaluating first if needed.
    ///
    /// `None` if the outcome is a success. Every call hands out the same
    /// shared error.
    pub fn failure(&self) -> Option<Rc<E>> {
        self.evaluate_if_unevaluated();
        match &*self.state.borrow() {
            LazyState::Evaluated(Outcome::Failure(error)) => Some(Rc::clone(error)),
            _ => None,
        }
    }

    /// Returns the produced values, or the failure wrapped in an
    /// [`EvaluationError`].
    ///
    /// Evaluates first if needed. A cached success is returned without calling
    /// the function again.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError`] if the cached outcome is a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nonstrict::control::lazy_tupled;
    ///
    /// let checked = lazy_tupled(|a: u8, b: u8| a.checked_add(b).ok_or("overflow"), (200, 100));
    /// let error = checked.force().unwrap_err();
    /// assert_eq!(*error.inner(), "overflow");
    ///
    /// let sum = lazy_tupled(|a: u8, b: u8| a.checked_add(b).ok_or("overflow"), (20, 10));
    /// assert_eq!(*sum.force().unwrap(), [30]);
    /// ```
    pub fn force(&self) -> Result<Ref<'_, [R]>, EvaluationError<E>> {
        if let Some(error) = self.failure() {
            return Err(EvaluationError::new(error));
        }
        Ok(Ref::map(self.state.borrow(), |state| match state {
            LazyState::Evaluated(Outcome::Success(values)) => values.as_slice(),
            _ => Default::default(),
        }))
    }

    /// Returns an iterator over the produced values.
    ///
    /// The iterator is itself lazy: the cell is evaluated on the first call to
    /// `next` if it has not been already. A failed cell yields nothing. Each
    /// call to `iter` starts again from the first cached value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nonstrict::control::lazy_many;
    ///
    /// let words = lazy_many(
    ///     |text: &str| Ok::<_, ()>(text.split_whitespace().map(str::to_owned).collect::<Vec<_>>()),
    ///     "lazy by default",
    /// );
    /// let values = words.iter();
    /// assert!(!words.is_evaluated());
    ///
    /// assert_eq!(values.collect::<Vec<_>>(), ["lazy", "by", "default"]);
    /// assert_eq!(words.iter().count(), 3);
    /// ```
    pub const fn iter(&self) -> Iter<'_, D, R, E, F>
    where
        R: Clone,
    {
        Iter {
            lazy: self,
            snapshot: None,
        }
    }

    /// Consumes the cell and returns its outcome, evaluating if needed.
    pub fn into_outcome(self) -> Outcome<R, Rc<E>> {
        match self.state.into_inner() {
            LazyState::Evaluated(outcome) => outcome,
            LazyState::Unevaluated => invoke(&self.function, self.argument),
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// Iterator over the values of a [`Lazy`] cell.
///
/// Created by [`Lazy::iter`]. The first call to `next` clones the values
/// cached at that moment; the iterator then yields from that copy, so
/// re-evaluating an impure cell mid-iteration does not mix two outcomes.
pub struct Iter<'a, D, R, E, F> {
    lazy: &'a Lazy<D, R, E, F>,
    snapshot: Option<smallvec::IntoIter<[R; 1]>>,
}

impl<D, R, E, F> Iterator for Iter<'_, D, R, E, F>
where
    D: Clone,
    R: Clone,
    F: Fn(D) -> Result<Results<R>, E>,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let lazy = self.lazy;
        self.snapshot
            .get_or_insert_with(|| {
                let values: Results<R> = lazy
                    .result()
                    .map_or_else(Results::new, |values| values.iter().cloned().collect());
                values.into_iter()
            })
            .next()
    }
}

impl<'a, D, R, E, F> IntoIterator for &'a Lazy<D, R, E, F>
where
    D: Clone,
    R: Clone,
    F: Fn(D) -> Result<Results<R>, E>,
{
    type Item = R;
    type IntoIter = Iter<'a, D, R, E, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Shape-specific Constructors
// =============================================================================

/// Delays a function of one argument that returns one value.
///
/// # Examples
///
/// ```rust
/// use nonstrict::control::lazy;
///
/// let cell = lazy(|name: String| Ok::<_, ()>(name.len()), "Ferris".to_string());
/// assert_eq!(cell.force().map(|values| values[0]), Ok(6));
/// ```
pub fn lazy<D, R, E, G>(
    function: G,
    argument: D,
) -> Lazy<D, R, E, impl Fn(D) -> Result<Results<R>, E>>
where
    G: Fn(D) -> Result<R, E>,
{
    Lazy::new(
        move |argument| function(argument).map(|value| Results::from_buf([value])),
        argument,
    )
}

/// Delays a function of no arguments that returns one value.
///
/// The function is adapted to take the unit argument `()`.
pub fn lazy_nullary<R, E, G>(function: G) -> Lazy<(), R, E, impl Fn(()) -> Result<Results<R>, E>>
where
    G: Fn() -> Result<R, E>,
{
    Lazy::new(
        move |()| function().map(|value| Results::from_buf([value])),
        (),
    )
}

/// Delays a function of one argument run only for its side effects.
///
/// A successful call produces no values.
pub fn lazy_effect<D, E, G>(
    function: G,
    argument: D,
) -> Lazy<D, (), E, impl Fn(D) -> Result<Results<()>, E>>
where
    G: Fn(D) -> Result<(), E>,
{
    Lazy::new(
        move |argument| function(argument).map(|()| Results::new()),
        argument,
    )
}

/// Delays a function of no arguments run only for its side effects.
///
/// With the default purity this runs the effect at most once, which makes it
/// a one-time initializer; make it [`impure`](Lazy::impure) to repeat the
/// effect on every evaluation.
pub fn lazy_nullary_effect<E, G>(
    function: G,
) -> Lazy<(), (), E, impl Fn(()) -> Result<Results<()>, E>>
where
    G: Fn() -> Result<(), E>,
{
    Lazy::new(move |()| function().map(|()| Results::new()), ())
}

/// Delays a function of several positional arguments bound as a tuple.
///
/// The function is tuple-ized with [`entuple`]; `arguments` is the tuple of
/// its parameters (`()` for none, `(a,)` for one).
///
/// # Examples
///
/// ```rust
/// use nonstrict::control::lazy_tupled;
///
/// fn clamp(value: i32, low: i32, high: i32) -> Result<i32, String> {
///     if low > high {
///         return Err(format!("empty range {low}..={high}"));
///     }
///     Ok(value.clamp(low, high))
/// }
///
/// let cell = lazy_tupled(clamp, (15, 0, 10));
/// assert_eq!(cell.result().as_deref(), Some(&[10][..]));
/// ```
pub fn lazy_tupled<Args, R, E, G>(
    function: G,
    arguments: Args,
) -> Lazy<Args, R, E, impl Fn(Args) -> Result<Results<R>, E>>
where
    G: TupledFn<Args, Output = Result<R, E>>,
{
    let tupled = entuple(function);
    Lazy::new(
        move |arguments| tupled(arguments).map(|value| Results::from_buf([value])),
        arguments,
    )
}

/// Delays a function of one argument that returns several values.
///
/// The returned collection is flattened, in order, into the cell's values.
pub fn lazy_many<D, R, E, I, G>(
    function: G,
    argument: D,
) -> Lazy<D, R, E, impl Fn(D) -> Result<Results<R>, E>>
where
    G: Fn(D) -> Result<I, E>,
    I: IntoIterator<Item = R>,
{
    Lazy::new(
        move |argument| function(argument).map(|values| values.into_iter().collect::<Results<R>>()),
        argument,
    )
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<D, R: fmt::Debug, E: fmt::Debug, F> fmt::Debug for Lazy<D, R, E, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            LazyState::Evaluated(outcome) => formatter.debug_tuple("Lazy").field(outcome).finish(),
            LazyState::Unevaluated => formatter
                .debug_tuple("Lazy")
                .field(&"<unevaluated>")
                .finish(),
        }
    }
}
