//! Either type - a value that can be one of two cases.
//!
//! This module provides the `Either<L, R>` type, a tagged union of
//! `Left(L)` and `Right(R)`. By convention `Right` is the success
//! channel that computations thread through, and `Left` is the
//! short-circuit channel that passes through every later step
//! unchanged - it plays the same absorbing role `Nothing` plays for
//! [`Maybe`](crate::container::Maybe), but carries a payload.
//!
//! # Examples
//!
//! ```rust
//! use monadix::container::Either;
//! use monadix::typeclass::Monad;
//!
//! fn add_one(n: i32) -> Either<String, i32> {
//!     if n == 7 {
//!         Either::Left("seven".to_string())
//!     } else {
//!         Either::Right(n + 1)
//!     }
//! }
//!
//! let counted = Either::Right(1).and_then(add_one).and_then(add_one).and_then(add_one);
//! assert_eq!(counted, Either::Right(4));
//!
//! let stuck = Either::Right(6).and_then(add_one).and_then(add_one).and_then(add_one);
//! assert_eq!(stuck, Either::Left("seven".to_string()));
//! ```

use std::fmt;

use crate::typeclass::{Monad, TypeConstructor};

/// A value that is one of two cases.
///
/// `Either<L, R>` is either `Left(L)` or `Right(R)`. No relationship is
/// required between `L` and `R`. The monadic operations run over the
/// right channel only: `and_then` invokes its function on `Right` and
/// rebuilds `Left` untouched.
///
/// # Examples
///
/// ```rust
/// use monadix::container::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// assert_eq!(success.map_right(|n| n * 2), Either::Right(84));
/// assert_eq!(failure.map_right(|n| n * 2), Either::Left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The short-circuit case, absorbing under `and_then`.
    Left(L),
    /// The success case that computations continue through.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::container::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    /// assert!(!left.is_right());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::container::Either;
    ///
    /// let right: Either<i32, &str> = Either::Right("hello");
    /// assert!(right.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts into an `Option<L>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::container::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.left(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option<R>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::container::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.right(), Some("hello".to_string()));
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::container::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|n| n * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::container::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map_right(|s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Eliminates the either by applying one of two functions.
    ///
    /// This is case analysis as a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::container::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|n| n.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn and_then<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }
}

// =============================================================================
// Debug / Display Implementations
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    /// Renders as `Left (<value>)` or `Right (<value>)`.
    ///
    /// The payload renders through its own `Display`, so nested
    /// containers come out recursively: `Right (Right (foo))`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left ({value})"),
            Self::Right(value) => write!(formatter, "Right ({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(v)` becomes `Right(v)`, and `Err(e)` becomes `Left(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::container::Either;
    ///
    /// let either: Either<String, i32> = Ok(42).into();
    /// assert_eq!(either, Either::Right(42));
    ///
    /// let either: Either<String, i32> = Err("error".to_string()).into();
    /// assert_eq!(either, Either::Left("error".to_string()));
    /// ```
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

static_assertions::assert_impl_all!(Either<i32, i32>: Clone, Copy, Send, Sync);
static_assertions::assert_impl_all!(Either<String, i32>: Clone, Send, Sync);


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Right(v).and_then(f) == f(v) for all v

        #[test]
        fn prop_and_then_on_right_applies_function(value in any::<i32>()) {
            let function = |n: i32| -> Either<String, i32> {
                if n % 2 == 0 {
                    Either::Right(n.wrapping_mul(3))
                } else {
                    Either::Left("odd".to_string())
                }
            };
            let start: Either<String, i32> = Either::Right(value);
            prop_assert_eq!(start.and_then(function), function(value));
        }

        // Left(v).and_then(f) == Left(v) regardless of f

        #[test]
        fn prop_and_then_on_left_is_absorbing(message in any::<String>()) {
            let start: Either<String, i32> = Either::Left(message.clone());
            let result = start.and_then(|n| Either::Right(n.wrapping_add(1)));
            prop_assert_eq!(result, Either::Left(message));
        }

        // map_right agrees with and_then + pure

        #[test]
        fn prop_map_right_agrees_with_and_then_pure(
            value in prop::result::maybe_ok(any::<i32>(), any::<String>())
        ) {
            let container: Either<String, i32> = value.into();
            let function = |n: i32| n.wrapping_mul(2);

            let mapped = container.clone().map_right(function);
            let bound = container.and_then(|n| Either::<String, ()>::pure(function(n)));

            prop_assert_eq!(mapped, bound);
        }

        // fold is exhaustive: one of the two functions always runs

        #[test]
        fn prop_fold_is_exhaustive(
            value in prop::result::maybe_ok(any::<i32>(), any::<String>())
        ) {
            let container: Either<String, i32> = value.clone().into();
            let folded = container.fold(|message| format!("L:{message}"), |n| format!("R:{n}"));
            match value {
                Ok(n) => prop_assert_eq!(folded, format!("R:{n}")),
                Err(message) => prop_assert_eq!(folded, format!("L:{message}")),
            }
        }
    }
}
