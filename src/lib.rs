//! # monadix
//!
//! Algebraic container abstractions: `Maybe`, `Either`, and generic
//! monad composition.
//!
//! ## Overview
//!
//! This library lets calling code express optional and fallible
//! computations as value pipelines instead of repeated manual branching.
//! It provides:
//!
//! - **Type Classes**: the [`Monad`](typeclass::Monad) capability
//!   (`pure` + `and_then`) built on GAT-based higher-kinded-type emulation
//! - **Containers**: [`Maybe`](container::Maybe) (optional value) and
//!   [`Either`](container::Either) (disjoint two-case value)
//! - **Generic Combinators**: [`fmap`](typeclass::fmap),
//!   [`join`](typeclass::join), and [`kleisli`](typeclass::kleisli),
//!   written once against the capability and usable with any conforming
//!   container
//! - **Function Composition**: the [`Composed`](compose::Composed)
//!   adapter for wrapping and composing unary functions as values
//!
//! ## Feature Flags
//!
//! - `typeclass`: the `Monad` trait and generic combinators
//! - `container`: the `Maybe` and `Either` containers (implies `typeclass`)
//! - `compose`: function composition utilities
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadix::prelude::*;
//!
//! fn half(n: i32) -> Either<String, i32> {
//!     if n % 2 == 0 {
//!         Either::Right(n / 2)
//!     } else {
//!         Either::Left(format!("{n} is odd"))
//!     }
//! }
//!
//! let result = Either::<String, i32>::Right(8).and_then(half).and_then(half);
//! assert_eq!(result, Either::Right(2));
//!
//! let stuck = Either::<String, i32>::Right(6).and_then(half).and_then(half);
//! assert_eq!(stuck, Either::Left("3 is odd".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monadix::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "container")]
    pub use crate::container::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "container")]
pub mod container;

#[cfg(feature = "compose")]
pub mod compose;
