//! Error types for drape.
//!
//! Construction parameters are validated up front; everything after
//! construction runs on defined numeric fallbacks instead of errors, so
//! [`ConfigError`] is the only failure surface in the crate.

use std::fmt;

/// Errors from invalid cloth construction parameters.
///
/// Returned by [`ClothBuilder::build`](crate::ClothBuilder::build). A grid
/// that passes validation can be simulated indefinitely; degenerate runtime
/// geometry (a momentarily zero-length spring, a collinear triangle) is
/// handled with per-sub-step fallbacks rather than surfaced here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The grid needs at least two rows and two columns to form a surface.
    GridTooSmall {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// Point spacing must be positive; rest lengths derive from it.
    InvalidSpacing(f32),
    /// Total mass must be positive; it is distributed evenly over the grid.
    InvalidMass(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::GridTooSmall { rows, cols } => {
                write!(f, "Cloth grid must be at least 2x2, got {}x{}", rows, cols)
            }
            ConfigError::InvalidSpacing(s) => {
                write!(f, "Point spacing must be positive, got {}", s)
            }
            ConfigError::InvalidMass(m) => {
                write!(f, "Total mass must be positive, got {}", m)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages_name_the_offending_value() {
        let e = ConfigError::GridTooSmall { rows: 1, cols: 5 };
        assert!(e.to_string().contains("1x5"));

        let e = ConfigError::InvalidSpacing(-0.5);
        assert!(e.to_string().contains("-0.5"));

        let e = ConfigError::InvalidMass(0.0);
        assert!(e.to_string().contains('0'));
    }
}
