//! The `Composed` function adapter.
//!
//! This module provides a value wrapper for single-input/single-output
//! functions. Wrapping a function gives it a uniform invocation surface
//! ([`Composed::call`]) and lets it be composed with another adapter to
//! build a new one. The arity-1/1 restriction and the type agreement
//! between composed adapters are enforced by the `Fn(A) -> B` bound, so
//! misuse is a compile error rather than a runtime failure.
//!
//! # Examples
//!
//! ```rust
//! use monadix::compose::{compose, wrap};
//!
//! fn double(x: i32) -> i32 { x * 2 }
//! fn show(x: i32) -> String { x.to_string() }
//!
//! // double is applied first, then show
//! let adapter = compose(wrap(double), wrap(show));
//! assert_eq!(adapter.call(21), "42");
//! ```

use std::fmt;
use std::marker::PhantomData;

/// A single-input/single-output function wrapped as a composable value.
///
/// The `A` and `B` parameters pin the wrapped function's signature, so
/// two adapters only compose when the first's output type equals the
/// second's input type. There is nothing to check at call time.
///
/// Build one with [`wrap`]; invoke it with [`call`](Self::call);
/// combine two with [`compose`](Self::compose) or the free
/// [`compose`](compose()) function.
pub struct Composed<F, A, B> {
    function: F,
    _signature: PhantomData<fn(A) -> B>,
}

/// Lifts a single-input/single-output function into a [`Composed`] adapter.
///
/// Only values implementing `Fn(A) -> B` can be wrapped; anything else -
/// a non-function, or a function of a different arity - is rejected at
/// compile time:
///
/// ```compile_fail
/// // a non-function value cannot be wrapped
/// let _ = monadix::compose::wrap(42);
/// ```
///
/// ```compile_fail
/// // a two-argument function has the wrong arity
/// let _ = monadix::compose::wrap(|a: i32, b: i32| a + b);
/// ```
///
/// # Examples
///
/// ```rust
/// use monadix::compose::wrap;
///
/// let double = wrap(|x: i32| x * 2);
/// assert_eq!(double.call(21), 42);
/// ```
#[inline]
pub fn wrap<A, B, F>(function: F) -> Composed<F, A, B>
where
    F: Fn(A) -> B,
{
    Composed {
        function,
        _signature: PhantomData,
    }
}

impl<F, A, B> Composed<F, A, B>
where
    F: Fn(A) -> B,
{
    /// Invokes the wrapped function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::compose::wrap;
    ///
    /// let length = wrap(|s: &str| s.len());
    /// assert_eq!(length.call("hello"), 5);
    /// ```
    #[inline]
    pub fn call(&self, input: A) -> B {
        (self.function)(input)
    }

    /// Composes this adapter with another, producing `x => next(self(x))`.
    ///
    /// `self` is applied first; its output feeds `next`. The output type
    /// of `self` must therefore equal the input type of `next`, which
    /// the bound enforces at compile time:
    ///
    /// ```compile_fail
    /// use monadix::compose::wrap;
    ///
    /// let add_one = wrap(|x: i32| x + 1);
    /// let length = wrap(|s: String| s.len());
    /// // i32 output does not match String input
    /// let _ = add_one.compose(length);
    /// ```
    ///
    /// Composition is associative: grouping does not change the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::compose::wrap;
    ///
    /// let add_one = wrap(|x: i32| x + 1);
    /// let double = wrap(|x: i32| x * 2);
    ///
    /// // add_one runs first: (5 + 1) * 2 = 12
    /// let adapter = add_one.compose(double);
    /// assert_eq!(adapter.call(5), 12);
    /// ```
    #[inline]
    pub fn compose<G, C>(self, next: Composed<G, B, C>) -> Composed<impl Fn(A) -> C, A, C>
    where
        G: Fn(B) -> C,
    {
        let first = self.function;
        let second = next.function;
        wrap(move |input| second(first(input)))
    }
}

/// Composes two adapters, producing `x => second(first(x))`.
///
/// The first argument is applied first. Equivalent to
/// `first.compose(second)`; provided as a free function for call sites
/// that read better in prefix form.
///
/// # Examples
///
/// ```rust
/// use monadix::compose::{compose, wrap};
///
/// let trim = wrap(str::trim);
/// let length = wrap(str::len);
///
/// let adapter = compose(trim, length);
/// assert_eq!(adapter.call("  hello  "), 5);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(
    first: Composed<F, A, B>,
    second: Composed<G, B, C>,
) -> Composed<impl Fn(A) -> C, A, C>
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    first.compose(second)
}

impl<F: Clone, A, B> Clone for Composed<F, A, B> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            _signature: PhantomData,
        }
    }
}

impl<F, A, B> fmt::Debug for Composed<F, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Composed(<function>)")
    }
}
