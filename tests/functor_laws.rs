//! Property-based tests for the Functor laws of `fmap`.
//!
//! `fmap` must satisfy:
//!
//! - **Identity Law**: `fmap(identity, m) == m`
//! - **Composition Law**: `fmap(g, fmap(f, m)) == fmap(|x| g(f(x)), m)`
//!
//! `fmap` is defined entirely in terms of `and_then` and `pure`, so
//! these laws follow from the monad laws - but they are the contract
//! callers actually rely on, so they are verified directly here for
//! both containers.

#![cfg(all(feature = "container", feature = "compose"))]

use monadix::compose::identity;
use monadix::container::{Either, Maybe};
use monadix::typeclass::fmap;
use proptest::prelude::*;

// =============================================================================
// Maybe<T> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Maybe<i32>
    #[test]
    fn prop_maybe_identity_law(value in any::<Option<i32>>()) {
        let container: Maybe<i32> = value.into();
        prop_assert_eq!(fmap(identity, container), container);
    }

    /// Composition Law for Maybe<i32>
    #[test]
    fn prop_maybe_composition_law(value in any::<Option<i32>>()) {
        let container: Maybe<i32> = value.into();
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = fmap(function2, fmap(function1, container));
        let right = fmap(|x| function2(function1(x)), container);

        prop_assert_eq!(left, right);
    }

    /// Identity Law for Maybe<String>
    #[test]
    fn prop_maybe_string_identity_law(value in any::<Option<String>>()) {
        let container: Maybe<String> = value.clone().into();
        prop_assert_eq!(fmap(identity, container.clone()), container);
    }

    /// Composition Law for Maybe<String>: length then doubling
    #[test]
    fn prop_maybe_string_composition_law(value in any::<Option<String>>()) {
        let container: Maybe<String> = value.into();
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_mul(2);

        let left = fmap(function2, fmap(function1, container.clone()));
        let right = fmap(|x| function2(function1(x)), container);

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Either<L, R> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Either<String, i32>
    #[test]
    fn prop_either_identity_law(
        value in prop::result::maybe_ok(any::<i32>(), any::<String>())
    ) {
        let container: Either<String, i32> = value.into();
        prop_assert_eq!(fmap(identity, container.clone()), container);
    }

    /// Composition Law for Either<String, i32>
    #[test]
    fn prop_either_composition_law(
        value in prop::result::maybe_ok(any::<i32>(), any::<String>())
    ) {
        let container: Either<String, i32> = value.into();
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = fmap(function2, fmap(function1, container.clone()));
        let right = fmap(|x| function2(function1(x)), container);

        prop_assert_eq!(left, right);
    }

    /// fmap never moves a value across channels: Left stays Left, Right stays Right
    #[test]
    fn prop_either_fmap_preserves_channel(
        value in prop::result::maybe_ok(any::<i32>(), any::<String>())
    ) {
        let container: Either<String, i32> = value.into();
        let was_right = container.is_right();
        let mapped = fmap(|n: i32| n.wrapping_mul(2), container);
        prop_assert_eq!(mapped.is_right(), was_right);
    }
}
