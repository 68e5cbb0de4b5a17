//! Error types for iso_core operations.
//!
//! Provides a simple error enum with no external dependencies for no_std compatibility.
//! Every variant signals a broken index contract between a caller and the
//! lookup tables; the fallible `try_*` lookups return these instead of panicking.

use core::fmt;

/// Error types that can occur during iso_core operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsoCoreError {
    /// A cube index outside `[0, 255]` was presented to the triangulation table.
    CubeIndexOutOfRange {
        /// The offending index.
        index: usize,
    },
    /// An edge index outside `[0, 11]` was presented to the edge table.
    EdgeIndexOutOfRange {
        /// The offending index.
        index: usize,
    },
}

impl fmt::Display for IsoCoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsoCoreError::CubeIndexOutOfRange { index } => {
                write!(f, "cube index {} is outside [0, 255]", index)
            }
            IsoCoreError::EdgeIndexOutOfRange { index } => {
                write!(f, "edge index {} is outside [0, 11]", index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IsoCoreError {}
