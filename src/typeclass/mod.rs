//! Type class traits and generic combinators.
//!
//! This module provides the capability abstraction every container in
//! this crate implements, and the combinators built on top of it:
//!
//! - [`TypeConstructor`]: GAT-based emulation of higher-kinded types
//! - [`Monad`]: the capability - `pure` (wrap a plain value) plus
//!   `and_then` (bind)
//! - [`fmap`], [`join`], [`kleisli`]: free generic functions defined
//!   purely in terms of the capability
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types, so this module uses Generic
//! Associated Types to abstract over container shape. A container
//! implements [`TypeConstructor`] to name its payload type and to
//! re-apply itself to a different payload, and the [`Monad`] trait and
//! combinators are written against that interface. A type that does not
//! conform simply fails the trait bound at compile time.
//!
//! # Examples
//!
//! ```rust
//! use monadix::typeclass::{Monad, fmap, join};
//! use monadix::container::Maybe;
//!
//! let chained = Maybe::Just(2).and_then(|n| Maybe::Just(n * 10));
//! assert_eq!(chained, Maybe::Just(20));
//!
//! let mapped = fmap(|n: i32| n + 1, Maybe::Just(1));
//! assert_eq!(mapped, Maybe::Just(2));
//!
//! let flattened = join(Maybe::Just(Maybe::Just("deep")));
//! assert_eq!(flattened, Maybe::Just("deep"));
//! ```

mod combinators;
mod higher;
mod monad;

pub use combinators::{fmap, join, kleisli};
pub use higher::TypeConstructor;
pub use monad::Monad;
