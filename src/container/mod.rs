//! Concrete monadic containers.
//!
//! This module provides the two containers the library ships:
//!
//! - [`Maybe`]: an optional value - `Just(v)` or `Nothing`
//! - [`Either`]: a disjoint two-case value - `Left(l)` or `Right(r)`
//!
//! Both implement the [`Monad`](crate::typeclass::Monad) capability, so
//! the generic combinators in [`typeclass`](crate::typeclass) work on
//! them uniformly. Each has an absorbing state (`Nothing`, `Left`) that
//! short-circuits a chain of `and_then` calls without invoking any
//! later function.
//!
//! # Examples
//!
//! ```rust
//! use monadix::container::{Either, Maybe};
//! use monadix::typeclass::Monad;
//!
//! let present = Maybe::Just(1).and_then(|n| Maybe::Just(n + 1));
//! assert_eq!(present, Maybe::Just(2));
//!
//! let success: Either<String, i32> = Either::Right(1).and_then(|n| Either::Right(n + 1));
//! assert_eq!(success, Either::Right(2));
//! ```

mod either;
mod maybe;

pub use either::Either;
pub use maybe::Maybe;
