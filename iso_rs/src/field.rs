//! Reference scalar fields.
//!
//! Both fields sample in lattice space, so a `size`-point grid covers
//! `[0, size-1]` on every axis. Any [`ScalarField`] works with the mesher;
//! these two cover the common demo and test cases.

use iso_core::{Point3, ScalarField};
use noise::{NoiseFn, Perlin};

use crate::config::MesherConfig;

/// Squared distance to the centre of the grid.
///
/// The centre is `size / 2` on every axis, so a threshold of `r²` yields a
/// sphere of radius `r` around that point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereField {
    center: Point3,
}

impl SphereField {
    /// Sphere field centred in a `size³` lattice.
    pub fn new(size: u32) -> Self {
        Self {
            center: Point3::splat(size as f32 / 2.0),
        }
    }

    /// Centre of the field in lattice space.
    #[inline]
    pub fn center(&self) -> Point3 {
        self.center
    }
}

impl ScalarField for SphereField {
    #[inline]
    fn density(&self, point: Point3) -> f32 {
        (point - self.center).length_squared()
    }
}

/// Pseudo-3D Perlin noise built from 2D slices.
///
/// Averages 2D Perlin over the six ordered axis pairs at `point / scale`.
/// Each sample is remapped from `[-1, 1]` to `[0, 1]`, so thresholds in
/// `[0, 1]` select a fraction of the volume.
#[derive(Debug, Clone)]
pub struct PerlinField {
    noise: Perlin,
    scale: f64,
}

impl PerlinField {
    /// Seed used when none is supplied.
    pub const DEFAULT_SEED: u32 = 0;

    /// Create a Perlin field.
    ///
    /// # Arguments
    /// * `scale` - Lattice units per noise period (finite, non-zero)
    /// * `seed` - Noise seed
    pub fn new(scale: f32, seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
            scale: scale as f64,
        }
    }

    /// Scale factor applied to sample positions.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale as f32
    }

    #[inline]
    fn sample(&self, a: f64, b: f64) -> f64 {
        ((self.noise.get([a, b]) + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

impl ScalarField for PerlinField {
    fn density(&self, point: Point3) -> f32 {
        let x = point.x as f64 / self.scale;
        let y = point.y as f64 / self.scale;
        let z = point.z as f64 / self.scale;

        let sum = self.sample(x, y)
            + self.sample(x, z)
            + self.sample(y, z)
            + self.sample(y, x)
            + self.sample(z, x)
            + self.sample(z, y);

        (sum / 6.0) as f32
    }
}

/// Selects one of the reference fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    /// [`SphereField`] centred in the grid.
    #[default]
    Sphere,
    /// [`PerlinField`] using the configured scale.
    Perlin {
        /// Noise seed.
        seed: u32,
    },
}

impl FieldKind {
    /// Instantiate the field for a configuration.
    pub fn build(self, config: &MesherConfig) -> Box<dyn ScalarField + Send + Sync> {
        match self {
            FieldKind::Sphere => Box::new(SphereField::new(config.size)),
            FieldKind::Perlin { seed } => Box::new(PerlinField::new(config.scale, seed)),
        }
    }
}
