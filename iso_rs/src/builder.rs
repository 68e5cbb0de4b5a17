//! MesherBuilder pattern for constructing GridMesher.
//!
//! Provides a fluent API for building meshers with validation.

use crate::config::MesherConfig;
use crate::dedup::DedupStrategy;
use crate::error::Result;
use crate::mesher::GridMesher;

/// Builder for constructing `GridMesher` instances.
///
/// Starts from [`MesherConfig::default`] with the requested size and checks
/// every parameter in [`build`](Self::build), before any generation work.
///
/// # Example
///
/// ```
/// use iso_rs::MesherBuilder;
///
/// let mesher = MesherBuilder::new(16)
///     .with_spacing(0.5)
///     .with_iso_threshold(25.0)
///     .build()?;
/// assert_eq!(mesher.config().size, 16);
/// # Ok::<(), iso_rs::IsoError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MesherBuilder {
    config: MesherConfig,
    dedup: DedupStrategy,
}

impl MesherBuilder {
    /// Create a new builder for a grid of `size` lattice points per axis.
    pub fn new(size: u32) -> Self {
        Self {
            config: MesherConfig {
                size,
                ..MesherConfig::default()
            },
            dedup: DedupStrategy::default(),
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: MesherConfig) -> Self {
        Self {
            config,
            dedup: DedupStrategy::default(),
        }
    }

    /// Set the world-space distance between lattice points.
    ///
    /// The default spacing is 1.0.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.config.spacing = spacing;
        self
    }

    /// Set the field-space scale factor handed to field providers.
    ///
    /// The default scale is 2.0.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.config.scale = scale;
        self
    }

    /// Set the iso threshold.
    ///
    /// The default threshold is 0.0.
    pub fn with_iso_threshold(mut self, iso_threshold: f32) -> Self {
        self.config.iso_threshold = iso_threshold;
        self
    }

    /// Choose how raw vertices are merged.
    pub fn with_dedup_strategy(mut self, strategy: DedupStrategy) -> Self {
        self.dedup = strategy;
        self
    }

    /// The configuration built so far (unvalidated).
    pub fn config(&self) -> &MesherConfig {
        &self.config
    }

    /// Validate the configuration and build the mesher.
    ///
    /// # Errors
    /// Returns a configuration error for any parameter outside its range.
    pub fn build(self) -> Result<GridMesher> {
        self.config.validate()?;
        Ok(GridMesher::from_parts(self.config, self.dedup))
    }
}
