//! Error types for iso_rs operations.
//!
//! Configuration errors are raised before any generation work starts. Mesh
//! validation and export errors come from the finished mesh.

use thiserror::Error;

/// Errors that can occur during iso_rs operations.
#[derive(Error, Debug)]
pub enum IsoError {
    /// Grid resolution outside `[2, 100]`.
    #[error("grid size {size} is outside [2, 100]")]
    InvalidSize {
        /// The rejected size.
        size: u32,
    },

    /// Lattice spacing outside `[0, 2]` (or NaN).
    #[error("spacing {spacing} is outside [0, 2]")]
    InvalidSpacing {
        /// The rejected spacing.
        spacing: f32,
    },

    /// Field scale that is zero or not finite.
    #[error("scale {scale} must be finite and non-zero")]
    InvalidScale {
        /// The rejected scale.
        scale: f32,
    },

    /// Iso threshold that is not finite.
    #[error("iso threshold {value} must be finite")]
    InvalidIsoThreshold {
        /// The rejected threshold.
        value: f32,
    },

    /// A mesh broke one of its structural invariants.
    #[error("invalid mesh: {message}")]
    InvalidMesh {
        /// Description of the broken invariant.
        message: String,
    },

    /// I/O error while exporting a mesh.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IsoError {
    /// True for the errors raised while validating a configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            IsoError::InvalidSize { .. }
                | IsoError::InvalidSpacing { .. }
                | IsoError::InvalidScale { .. }
                | IsoError::InvalidIsoThreshold { .. }
        )
    }
}

/// Result type alias for iso_rs operations.
pub type Result<T> = std::result::Result<T, IsoError>;
