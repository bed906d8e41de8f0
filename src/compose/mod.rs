//! Function composition utilities.
//!
//! This module provides the [`Composed`] adapter - a wrapper that turns
//! a single-input/single-output function into a value that can be
//! invoked uniformly and composed with other adapters - plus the helper
//! combinators the composition laws are stated with.
//!
//! # Overview
//!
//! - [`wrap`]: lift an `Fn(A) -> B` into a [`Composed`] adapter
//! - [`Composed::call`]: invoke the wrapped function
//! - [`compose`] / [`Composed::compose`]: build the adapter for
//!   `x => second(first(x))` - the first argument is applied first
//! - [`identity`], [`constant`]: the I and K combinators
//!
//! Arity and type mismatches are compile errors: an adapter only wraps
//! functions of exactly one input and one output, and two adapters only
//! compose when the first's output type matches the second's input type.
//!
//! # Examples
//!
//! ```rust
//! use monadix::compose::{compose, wrap};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // add_one is applied first: (5 + 1) * 2 = 12
//! let adapter = compose(wrap(add_one), wrap(double));
//! assert_eq!(adapter.call(5), 12);
//! ```

mod adapter;
mod utils;

pub use adapter::{Composed, compose, wrap};
pub use utils::{constant, identity};
