//! Error types for the blobfield core.
//!
//! The taxonomy is deliberately narrow: nothing in the scene pipeline is
//! fatal, and out-of-range values are clamped at the settings boundary
//! rather than reported.

use thiserror::Error;

/// Errors produced by scene operations.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Width or height was non-positive in an externally supplied settings record.
    #[error("invalid dimensions: width and height must be positive")]
    InvalidDimensions,

    /// A color string could not be parsed as a 6-digit hex color.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// The color list in an externally supplied settings record was outside
    /// the 1..=8 bound.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),
}
