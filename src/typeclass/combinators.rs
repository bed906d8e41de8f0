//! Generic combinators defined purely against the [`Monad`] capability.
//!
//! These are free functions, not methods: they take the container as an
//! explicit argument and work uniformly over every conforming container
//! without modification. Passing a type that does not implement the
//! capability is a compile error, never a runtime one.
//!
//! - [`fmap`]: map a plain function over any monad
//! - [`join`]: flatten a monad nested one level in itself
//! - [`kleisli`]: compose two monad-returning functions

use super::higher::TypeConstructor;
use super::monad::Monad;

/// Applies a plain value-to-value function inside a container.
///
/// Returns a new container of the same kind holding `function(value)` if
/// a value is present, and the absorbing state unchanged otherwise.
/// Defined as `container.and_then(|x| M::pure(function(x)))`, so the
/// container's own `pure` constructs the result.
///
/// # Laws
///
/// - **Identity**: `fmap(identity, m) == m`
/// - **Composition**: `fmap(g, fmap(f, m)) == fmap(|x| g(f(x)), m)`
///
/// # Examples
///
/// ```rust
/// use monadix::typeclass::fmap;
/// use monadix::container::{Either, Maybe};
///
/// let doubled = fmap(|n: i32| n * 2, Maybe::Just(21));
/// assert_eq!(doubled, Maybe::Just(42));
///
/// let absent = fmap(|n: i32| n * 2, Maybe::Nothing);
/// assert_eq!(absent, Maybe::Nothing);
///
/// let shown = fmap(|n: i32| n.to_string(), Either::<&str, i32>::Right(7));
/// assert_eq!(shown, Either::Right("7".to_string()));
/// ```
#[inline]
pub fn fmap<M, B, F>(function: F, container: M) -> M::WithType<B>
where
    M: Monad,
    F: FnOnce(M::Inner) -> B,
{
    container.and_then(|value| M::pure(function(value)))
}

/// Flattens a container nested one level in itself.
///
/// `join(m)` is `m.and_then(|inner| inner)`. The inner value must be a
/// container of the same kind, which the `Inner = M::WithType<A>` bound
/// enforces at compile time - there is no runtime contract to violate.
///
/// The absorbing state short-circuits before the inner value is reached:
/// `join(Left(Left(v)))` is `Left(Left(v))`, not `Left(v)`.
///
/// # Examples
///
/// ```rust
/// use monadix::typeclass::join;
/// use monadix::container::{Either, Maybe};
///
/// assert_eq!(join(Maybe::Just(Maybe::Just(42))), Maybe::Just(42));
/// assert_eq!(join(Maybe::Just(Maybe::<i32>::Nothing)), Maybe::Nothing);
///
/// let nested: Either<&str, Either<&str, &str>> = Either::Right(Either::Right("foo"));
/// assert_eq!(join(nested), Either::Right("foo"));
/// ```
#[inline]
pub fn join<M, A>(nested: M) -> M::WithType<A>
where
    M: Monad<Inner = <M as TypeConstructor>::WithType<A>>,
{
    nested.and_then(|inner| inner)
}

/// Composes two monad-returning functions into one.
///
/// `kleisli(outer, inner)` produces the function
/// `move |x| inner(x).and_then(outer)`.
///
/// Note the composition order: the **second** argument is applied first,
/// and its result is fed through the first. This right-to-left argument
/// convention is deliberate and differs from the left-to-right "fish
/// operator" (`>=>`) found elsewhere; call sites depend on it, so it is
/// documented here rather than changed.
///
/// # Examples
///
/// ```rust
/// use monadix::typeclass::kleisli;
/// use monadix::container::Maybe;
///
/// fn half(n: i32) -> Maybe<i32> {
///     if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing }
/// }
///
/// fn decrement(n: i32) -> Maybe<i32> {
///     if n > 0 { Maybe::Just(n - 1) } else { Maybe::Nothing }
/// }
///
/// // decrement runs first, then half: (9 - 1) / 2 = 4
/// let composed = kleisli(half, decrement);
/// assert_eq!(composed(9), Maybe::Just(4));
///
/// // decrement(8) = 7, which half rejects
/// assert_eq!(composed(8), Maybe::Nothing);
/// ```
#[inline]
pub fn kleisli<A, C, M, F, G>(outer: F, inner: G) -> impl Fn(A) -> M::WithType<C>
where
    M: Monad,
    G: Fn(A) -> M,
    F: Fn(M::Inner) -> M::WithType<C>,
{
    move |input| inner(input).and_then(|value| outer(value))
}
