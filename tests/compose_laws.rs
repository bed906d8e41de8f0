//! Property-based tests for function composition laws.
//!
//! The `Composed` adapter must satisfy:
//!
//! - **Associativity**: `compose(compose(a, b), c)` and
//!   `compose(a, compose(b, c))` agree on every input
//! - **Left Identity**: `compose(wrap(identity), a)` behaves like `a`
//! - **Right Identity**: `compose(a, wrap(identity))` behaves like `a`
//! - **Application Order**: `compose(a, b).call(x) == b(a(x))` - the
//!   first argument runs first
//!
//! Using proptest, we generate random inputs to verify these laws
//! across a wide range of values.

#![cfg(feature = "compose")]

use monadix::compose::{compose, constant, identity, wrap};
use proptest::prelude::*;

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// Left Identity Law: compose(wrap(identity), f).call(x) == f(x)
    #[test]
    fn prop_compose_left_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        let composed = compose(wrap(identity), wrap(function));

        prop_assert_eq!(composed.call(x), function(x));
    }

    /// Right Identity Law: compose(f, wrap(identity)).call(x) == f(x)
    #[test]
    fn prop_compose_right_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        let composed = compose(wrap(function), wrap(identity));

        prop_assert_eq!(composed.call(x), function(x));
    }

    /// Associativity Law: both groupings of three functions agree
    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        let grouped_left = compose(compose(wrap(function1), wrap(function2)), wrap(function3));
        let grouped_right = compose(wrap(function1), compose(wrap(function2), wrap(function3)));

        prop_assert_eq!(grouped_left.call(x), grouped_right.call(x));
    }

    /// Application Order: the first adapter runs first
    #[test]
    fn prop_compose_application_order(x in any::<i32>()) {
        let first = |n: i32| n.wrapping_add(10);
        let second = |n: i32| n.wrapping_mul(3);

        let composed = compose(wrap(first), wrap(second));

        prop_assert_eq!(composed.call(x), second(first(x)));
    }

    /// Associativity holds across type changes too
    #[test]
    fn prop_compose_associativity_across_types(x in any::<i32>()) {
        let show = |n: i32| n.to_string();
        let length = |s: String| s.len();
        let is_even = |n: usize| n % 2 == 0;

        let grouped_left = compose(compose(wrap(show), wrap(length)), wrap(is_even));
        let grouped_right = compose(wrap(show), compose(wrap(length), wrap(is_even)));

        prop_assert_eq!(grouped_left.call(x), grouped_right.call(x));
    }
}

// =============================================================================
// Constant Combinator Laws
// =============================================================================

proptest! {
    /// constant absorbs whatever runs before it
    #[test]
    fn prop_constant_absorbs_preceding_function(x in any::<i32>(), fixed in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(7);

        let composed = compose(wrap(function), wrap(constant(fixed)));

        prop_assert_eq!(composed.call(x), fixed);
    }
}
