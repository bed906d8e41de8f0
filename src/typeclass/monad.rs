//! Monad type class - sequencing computations within a container.
//!
//! This module provides the `Monad` trait, the capability every
//! container in this crate implements. It consists of exactly two
//! operations: `pure`, which wraps a plain value into the container's
//! success variant, and `and_then`, which threads the contained value
//! through a function returning a new container of the same kind.
//!
//! Everything else in the library - [`fmap`](super::fmap),
//! [`join`](super::join), [`kleisli`](super::kleisli) - is defined
//! purely in terms of this capability, so a new container gains all of
//! them by implementing these two methods.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! Lifting a pure value and binding a function is the same as applying
//! the function:
//!
//! ```text
//! Self::pure(a).and_then(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! Binding `pure` returns the original monad:
//!
//! ```text
//! m.and_then(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! The order of binding operations can be reassociated:
//!
//! ```text
//! m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadix::typeclass::Monad;
//! use monadix::container::Maybe;
//!
//! fn parse_positive(input: &str) -> Maybe<i32> {
//!     match input.parse::<i32>() {
//!         Ok(n) if n > 0 => Maybe::Just(n),
//!         _ => Maybe::Nothing,
//!     }
//! }
//!
//! let result = parse_positive("42").and_then(|n| Maybe::Just(n * 2));
//! assert_eq!(result, Maybe::Just(84));
//!
//! // The absent state short-circuits; the function is never invoked.
//! let result = parse_positive("-1").and_then(|n| Maybe::Just(n * 2));
//! assert_eq!(result, Maybe::Nothing);
//! ```

use super::higher::TypeConstructor;

/// A type class for containers that support sequencing of computations.
///
/// Any type implementing `pure` and `and_then` automatically works with
/// the generic combinators in this crate. The containers provided here
/// each have an absorbing state - `Nothing` for `Maybe`, `Left` for
/// `Either` - which `and_then` passes through unchanged without invoking
/// its function.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// Self::pure(a).and_then(f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// m.and_then(Self::pure) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))
/// ```
///
/// # Examples
///
/// ```rust
/// use monadix::typeclass::Monad;
/// use monadix::container::Either;
///
/// let x: Either<String, i32> = Either::Right(5);
/// let y = x.and_then(|n| Either::Right(n * 2));
/// assert_eq!(y, Either::Right(10));
/// ```
pub trait Monad: TypeConstructor {
    /// Wraps a plain value into the container's success variant.
    ///
    /// This is the monadic return: `Maybe::pure` produces `Just`, and
    /// `Either::pure` produces `Right`. Note that the resulting
    /// container kind is `Self`'s, so for `Either<L, R>` the left type
    /// stays pinned to `L`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::typeclass::Monad;
    /// use monadix::container::{Either, Maybe};
    ///
    /// let wrapped: Maybe<i32> = Maybe::<()>::pure(42);
    /// assert_eq!(wrapped, Maybe::Just(42));
    ///
    /// let wrapped: Either<String, i32> = Either::<String, ()>::pure(42);
    /// assert_eq!(wrapped, Either::Right(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies a function to the contained value and flattens the result.
    ///
    /// This is the fundamental operation of the Monad type class - the
    /// bind operator (`>>=` in Haskell). The function must return a
    /// container of the same kind. On the absorbing state (`Nothing`,
    /// `Left`) the function is not invoked and the state passes through
    /// unchanged.
    ///
    /// # Arguments
    ///
    /// * `function` - A function from the inner value to a new container
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::typeclass::Monad;
    /// use monadix::container::Maybe;
    ///
    /// let x = Maybe::Just(5);
    /// let y = x.and_then(|n| if n > 0 { Maybe::Just(n * 2) } else { Maybe::Nothing });
    /// assert_eq!(y, Maybe::Just(10));
    ///
    /// let z: Maybe<i32> = Maybe::Nothing;
    /// let w = z.and_then(|n| Maybe::Just(n * 2));
    /// assert_eq!(w, Maybe::Nothing);
    /// ```
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two computations, discarding the first result.
    ///
    /// Evaluates `self` for its effect on control flow only: an
    /// absorbing state still short-circuits, otherwise `next` is
    /// returned. In Haskell this is the `>>` operator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::typeclass::Monad;
    /// use monadix::container::Maybe;
    ///
    /// assert_eq!(Maybe::Just(5).then(Maybe::Just("hello")), Maybe::Just("hello"));
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.then(Maybe::Just("hello")), Maybe::Nothing);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.and_then(|_| next)
    }
}
