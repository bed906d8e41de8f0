//! Maybe type - an optional value.
//!
//! This module provides the `Maybe<T>` type, a tagged union of a
//! present value (`Just`) and an absent value (`Nothing`). It is used
//! to thread possibly-missing results through a pipeline of
//! [`and_then`](crate::typeclass::Monad::and_then) calls: once a step
//! produces `Nothing`, every later step passes it through unchanged.
//!
//! # Examples
//!
//! ```rust
//! use monadix::container::Maybe;
//! use monadix::typeclass::Monad;
//!
//! fn lookup(key: &str) -> Maybe<i32> {
//!     if key == "answer" { Maybe::Just(42) } else { Maybe::Nothing }
//! }
//!
//! let found = lookup("answer").and_then(|n| Maybe::Just(n / 2));
//! assert_eq!(found, Maybe::Just(21));
//! assert_eq!(found.from_maybe(0), 21);
//!
//! let missing = lookup("question").and_then(|n| Maybe::Just(n / 2));
//! assert_eq!(missing, Maybe::Nothing);
//! assert_eq!(missing.from_maybe(0), 0);
//! ```

use std::fmt;

use crate::typeclass::{Monad, TypeConstructor};

/// An optional value.
///
/// `Maybe<T>` is either `Just(T)` or `Nothing`. Exactly one variant is
/// active at a time, and `Nothing` is absorbing: once a chain reaches
/// it, no later function is invoked.
///
/// Absence is a first-class value here, not an error. No operation on
/// the `Nothing` path panics or logs; the only panicking operation is
/// [`from_just`](Self::from_just), which is an explicit assertion that
/// a value is present.
///
/// # Examples
///
/// ```rust
/// use monadix::container::Maybe;
///
/// let present = Maybe::Just(5);
/// assert!(present.is_just());
/// assert_eq!(present.map(|n| n * 2), Maybe::Just(10));
///
/// let absent: Maybe<i32> = Maybe::Nothing;
/// assert!(absent.is_nothing());
/// assert_eq!(absent.map(|n| n * 2), Maybe::Nothing);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// The absent value, absorbing under `and_then`.
    #[default]
    Nothing,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Just` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::container::Maybe;
    ///
    /// assert!(Maybe::Just(42).is_just());
    /// assert!(!Maybe::<i32>::Nothing.is_just());
    /// ```
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::container::Maybe;
    ///
    /// assert!(Maybe::<i32>::Nothing.is_nothing());
    /// assert!(!Maybe::Just(42).is_nothing());
    /// ```
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value, panicking on `Nothing`.
    ///
    /// Calling this on `Nothing` is a programmer-contract violation,
    /// not a recoverable condition. Use [`from_maybe`](Self::from_maybe)
    /// when absence is expected.
    ///
    /// # Panics
    ///
    /// Panics if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::container::Maybe;
    ///
    /// assert_eq!(Maybe::Just(42).from_just(), 42);
    /// ```
    #[inline]
    pub fn from_just(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("called `Maybe::from_just()` on a `Nothing` value"),
        }
    }

    /// Returns the contained value, or the given default on `Nothing`.
    ///
    /// This never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::container::Maybe;
    ///
    /// assert_eq!(Maybe::Just(42).from_maybe(0), 42);
    /// assert_eq!(Maybe::Nothing.from_maybe(0), 0);
    /// ```
    #[inline]
    pub fn from_maybe(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Converts into an `Option<T>`, consuming the maybe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::container::Maybe;
    ///
    /// assert_eq!(Maybe::Just(42).just(), Some(42));
    /// assert_eq!(Maybe::<i32>::Nothing.just(), None);
    /// ```
    #[inline]
    pub fn just(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Returns a reference to the contained value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::container::Maybe;
    ///
    /// let present = Maybe::Just("hello".to_string());
    /// assert_eq!(present.just_ref(), Some(&"hello".to_string()));
    /// ```
    #[inline]
    pub const fn just_ref(&self) -> Option<&T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a plain function to the contained value.
    ///
    /// This covers the single-output case of stepping a pipeline: the
    /// result is rewrapped in `Just`, and `Nothing` passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::container::Maybe;
    ///
    /// assert_eq!(Maybe::Just(5).map(|n| n * 2), Maybe::Just(10));
    /// assert_eq!(Maybe::<i32>::Nothing.map(|n| n * 2), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies a fallible function to the contained value.
    ///
    /// This covers the output-plus-failure case: `Ok` maps to `Just`
    /// and `Err` maps to `Nothing`, discarding the error. Combined with
    /// [`map`](Self::map) this replaces runtime inspection of a
    /// function's shape - the signature picks the behavior.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::container::Maybe;
    ///
    /// let parsed = Maybe::Just("42").try_map(|s| s.parse::<i32>());
    /// assert_eq!(parsed, Maybe::Just(42));
    ///
    /// let failed = Maybe::Just("not a number").try_map(|s| s.parse::<i32>());
    /// assert_eq!(failed, Maybe::Nothing);
    /// ```
    #[inline]
    pub fn try_map<B, E, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        match self {
            Self::Just(value) => Maybe::lift_result(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Lifting
    // =========================================================================

    /// Lifts a `Result` into a `Maybe`, discarding any error.
    ///
    /// This is the explicit adapter for fallible functions: call the
    /// function, then lift its result. `Ok(v)` becomes `Just(v)` and
    /// `Err(_)` becomes `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::container::Maybe;
    ///
    /// assert_eq!(Maybe::lift_result("7".parse::<i32>()), Maybe::Just(7));
    /// assert_eq!(Maybe::lift_result("x".parse::<i32>()), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn lift_result<E>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Just(value),
            Err(_) => Self::Nothing,
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn and_then<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

// =============================================================================
// Debug / Display Implementations
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    /// Renders as `Just <value>` or `Nothing`.
    ///
    /// The payload renders through its own `Display`, so nested
    /// containers come out recursively: `Just Just 5`, `Just Right (1)`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just {value}"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// `Some(v)` becomes `Just(v)`, and `None` becomes `Nothing`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// `Just(v)` becomes `Some(v)`, and `Nothing` becomes `None`.
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.just()
    }
}

impl<T, E> From<Result<T, E>> for Maybe<T> {
    /// `Ok(v)` becomes `Just(v)`; `Err(_)` becomes `Nothing`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::lift_result(result)
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Clone, Copy, Send, Sync);
static_assertions::assert_impl_all!(Maybe<String>: Clone, Send, Sync);
