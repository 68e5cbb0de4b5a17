//! Mesher configuration.

use crate::error::{IsoError, Result};

/// Smallest accepted grid resolution.
pub const MIN_SIZE: u32 = 2;
/// Largest accepted grid resolution.
pub const MAX_SIZE: u32 = 100;
/// Largest accepted lattice spacing.
pub const MAX_SPACING: f32 = 2.0;

/// Grid and surface parameters for one generation pass.
///
/// Build through [`MesherBuilder`](crate::MesherBuilder) or call
/// [`validate`](Self::validate) before use; the mesher never clamps values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MesherConfig {
    /// Lattice points per axis, in `[2, 100]`.
    pub size: u32,
    /// World units between adjacent lattice points, in `[0, 2]`.
    pub spacing: f32,
    /// Field-space scale factor consumed by field providers.
    pub scale: f32,
    /// Surface cutoff: corners sampling strictly below it are inside.
    pub iso_threshold: f32,
}

impl MesherConfig {
    /// Create a new configuration.
    ///
    /// # Arguments
    /// * `size` - Lattice points per axis
    /// * `spacing` - World units between lattice points
    /// * `scale` - Field-space scale factor
    /// * `iso_threshold` - Surface cutoff value
    #[inline]
    pub const fn new(size: u32, spacing: f32, scale: f32, iso_threshold: f32) -> Self {
        Self {
            size,
            spacing,
            scale,
            iso_threshold,
        }
    }

    /// Check every parameter against its valid range.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(IsoError::InvalidSize { size: self.size });
        }
        if !(0.0..=MAX_SPACING).contains(&self.spacing) {
            return Err(IsoError::InvalidSpacing {
                spacing: self.spacing,
            });
        }
        if !self.scale.is_finite() || self.scale == 0.0 {
            return Err(IsoError::InvalidScale { scale: self.scale });
        }
        if !self.iso_threshold.is_finite() {
            return Err(IsoError::InvalidIsoThreshold {
                value: self.iso_threshold,
            });
        }
        Ok(())
    }

    /// Number of cells, `(size - 1)³`.
    #[inline]
    pub const fn cell_count(&self) -> usize {
        iso_core::cell_count(self.size)
    }

    /// Number of lattice points, `size³`.
    #[inline]
    pub const fn lattice_point_count(&self) -> usize {
        let n = self.size as usize;
        n * n * n
    }
}

impl Default for MesherConfig {
    fn default() -> Self {
        Self {
            size: 10,
            spacing: 1.0,
            scale: 2.0,
            iso_threshold: 0.0,
        }
    }
}
