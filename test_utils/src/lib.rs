//! Utility helpers for tests.
//! Fixtures for building pawns and small arenas with fixed placement.

pub mod pawns;

pub use pawns::{arena_of, pawn_at, ArenaFixture};

/// Assert that `left` and `right` differ by less than `1e-4`.
///
/// # Panics
/// Panics with both values when they differ by more than the tolerance.
pub fn assert_close(left: f32, right: f32) {
    assert!(
        (left - right).abs() < 1e-4,
        "expected {right}, got {left}"
    );
}
