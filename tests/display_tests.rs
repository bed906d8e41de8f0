//! Integration tests for Display implementations.
//!
//! The containers render in the library's debug-string contract:
//! `Just <v>` / `Nothing` for Maybe and `Right (<v>)` / `Left (<v>)`
//! for Either, with nested monadic values rendered recursively through
//! their own Display implementations.

#![cfg(feature = "container")]

use monadix::container::{Either, Maybe};
use monadix::typeclass::{Monad, join};

// =============================================================================
// Maybe Display Tests
// =============================================================================

#[test]
fn maybe_just_display() {
    assert_eq!(format!("{}", Maybe::Just(5)), "Just 5");
}

#[test]
fn maybe_just_string_display() {
    assert_eq!(format!("{}", Maybe::Just("foo")), "Just foo");
}

#[test]
fn maybe_nothing_display() {
    assert_eq!(format!("{}", Maybe::<i32>::Nothing), "Nothing");
}

#[test]
fn maybe_nested_display() {
    let nested = Maybe::Just(Maybe::Just(1));
    assert_eq!(format!("{nested}"), "Just Just 1");
}

// =============================================================================
// Either Display Tests
// =============================================================================

#[test]
fn either_right_display() {
    let value: Either<&str, i32> = Either::Right(1);
    assert_eq!(format!("{value}"), "Right (1)");
}

#[test]
fn either_left_display() {
    let value: Either<&str, i32> = Either::Left("foo");
    assert_eq!(format!("{value}"), "Left (foo)");
}

#[test]
fn either_nested_right_display() {
    let nested: Either<&str, Either<&str, &str>> = Either::Right(Either::Right("foo"));
    assert_eq!(format!("{nested}"), "Right (Right (foo))");
}

#[test]
fn either_nested_left_display() {
    let nested: Either<Either<&str, &str>, i32> = Either::Left(Either::Left("foo"));
    assert_eq!(format!("{nested}"), "Left (Left (foo))");
}

#[test]
fn either_containing_maybe_display() {
    let mixed: Either<&str, Maybe<i32>> = Either::Right(Maybe::Just(3));
    assert_eq!(format!("{mixed}"), "Right (Just 3)");
}

// =============================================================================
// Rendering Through join
// =============================================================================

#[test]
fn join_right_right_renders_flattened() {
    let nested: Either<&str, Either<&str, &str>> = Either::Right(Either::Right("foo"));
    assert_eq!(format!("{nested}"), "Right (Right (foo))");
    assert_eq!(format!("{}", join(nested)), "Right (foo)");
}

#[test]
fn join_left_left_renders_unchanged() {
    // Left is absorbing, so join leaves the nested Left intact.
    let nested: Either<Either<&str, &str>, Either<Either<&str, &str>, &str>> =
        Either::Left(Either::Left("foo"));
    assert_eq!(format!("{nested}"), "Left (Left (foo))");
    assert_eq!(format!("{}", join(nested)), "Left (Left (foo))");
}

// =============================================================================
// Rendering Through Chains
// =============================================================================

#[test]
fn chain_renders_each_stage() {
    fn add_one(n: i32) -> Either<String, i32> {
        if n == 7 {
            Either::Left("seven".to_string())
        } else {
            Either::Right(n + 1)
        }
    }

    let mut value: Either<String, i32> = Either::Right(1);
    assert_eq!(format!("{value}"), "Right (1)");
    value = value.and_then(add_one);
    assert_eq!(format!("{value}"), "Right (2)");
    value = value.and_then(add_one);
    assert_eq!(format!("{value}"), "Right (3)");
    value = value.and_then(add_one);
    assert_eq!(format!("{value}"), "Right (4)");
}
