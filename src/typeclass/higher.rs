//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for abstracting over container
//! shape. Rust has no native Higher-Kinded Types: a trait cannot range
//! over `Maybe<_>` and `Either<L, _>` as type constructors directly.
//! The `TypeConstructor` trait works around this with a Generic
//! Associated Type, which is what allows the [`Monad`](super::Monad)
//! capability and the generic combinators to be written once for every
//! container in this crate.
//!
//! # Example
//!
//! ```rust
//! use monadix::typeclass::TypeConstructor;
//! use monadix::container::Maybe;
//!
//! // Maybe<i32> names i32 as its Inner type, and Maybe<String> as
//! // the same constructor re-applied to String.
//! fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
//! assert_inner::<Maybe<i32>>();
//! ```

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated
/// Types. It allows abstracting over type constructors such as
/// `Maybe<_>` or `Either<L, _>` (with the left type pinned).
///
/// # Associated Types
///
/// - `Inner`: the type parameter this constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should
///    be equivalent to `F` (up to type equality).
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>` this is `i32`; for `Either<L, R>` it is `R`,
    /// since the right channel is the one computations thread through.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Maybe<i32>`, `WithType<String>` is `Maybe<String>`. For
    /// `Either<L, R>`, `WithType<B>` is `Either<L, B>` - the left type
    /// is preserved, mirroring how `Result<T, E>` keeps its error type
    /// across `map` and `and_then`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` ensures the resulting
    /// type is itself a valid type constructor, so transformations chain.
    type WithType<B>: TypeConstructor<Inner = B>;
}
