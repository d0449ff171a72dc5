//! Errors raised while configuring or resizing an arena.
use thiserror::Error;

/// Rejected arena geometry.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ArenaError {
    /// Width and height must both be finite and strictly positive.
    #[error("arena dimensions must be finite and positive, got {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: f32,
        /// Requested height.
        height: f32,
    },
    /// Pawn boxes must have a finite, strictly positive edge length.
    #[error("pawn size must be finite and positive, got {0}")]
    InvalidPawnSize(f32),
}

/// Checks that `width` and `height` describe a usable arena.
///
/// # Errors
/// Returns [`ArenaError::InvalidDimensions`] for non-finite or non-positive
/// values.
pub fn validate_extent(width: f32, height: f32) -> Result<(), ArenaError> {
    let usable = |v: f32| v.is_finite() && v > 0.0;
    if usable(width) && usable(height) {
        Ok(())
    } else {
        Err(ArenaError::InvalidDimensions { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 10.0)]
    #[case(10.0, -1.0)]
    #[case(f32::NAN, 10.0)]
    #[case(10.0, f32::INFINITY)]
    fn unusable_extents_are_rejected(#[case] width: f32, #[case] height: f32) {
        assert!(matches!(
            validate_extent(width, height),
            Err(ArenaError::InvalidDimensions { .. })
        ));
    }

    #[rstest]
    fn positive_extent_is_accepted() {
        assert_eq!(validate_extent(0.5, 1200.0), Ok(()));
    }
}
