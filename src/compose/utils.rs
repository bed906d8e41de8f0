//! Helper functions (combinators) for function composition.
//!
//! - [`identity`]: the identity function (I combinator)
//! - [`constant`]: a function that always returns the same value (K combinator)
//!
//! These are the building blocks the composition laws are stated in
//! terms of: `identity` is the unit of [`compose`](super::compose), and
//! `constant` absorbs whatever is composed in front of it.

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// composing it on either side of an adapter leaves the adapter's
/// behavior unchanged. In combinatory logic this is the I combinator.
///
/// # Examples
///
/// ```
/// use monadix::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
///
/// # Use with composition
///
/// ```
/// use monadix::compose::{compose, identity, wrap};
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose(wrap(identity), wrap(double));
/// assert_eq!(composed.call(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Also known as the K combinator. Useful when a pipeline stage must
/// produce a fixed result regardless of what flows into it.
///
/// # Examples
///
/// ```
/// use monadix::compose::constant;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
/// assert_eq!(always_five(-3), 5);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}
