//! Scalar field contract.
//!
//! The mesher only ever talks to a field through [`ScalarField`], so field
//! implementations (analytic shapes, noise, sampled data) can be swapped
//! without touching the extraction algorithm.

use crate::types::Point3;

/// A scalar function over ℝ³ whose level set is extracted.
///
/// Implementations must be pure: the same point always yields the same value,
/// calls may happen any number of times and in any order, and the field is
/// defined everywhere (grid bounds are the caller's concern).
///
/// Any `Fn(Point3) -> f32` closure is a field:
///
/// ```
/// use iso_core::{Point3, ScalarField};
///
/// let plane = |p: Point3| p.y;
/// assert_eq!(plane.density(Point3::new(0.0, 2.0, 0.0)), 2.0);
/// ```
pub trait ScalarField {
    /// Sample the field at `point`.
    fn density(&self, point: Point3) -> f32;
}

impl<F> ScalarField for F
where
    F: Fn(Point3) -> f32,
{
    #[inline]
    fn density(&self, point: Point3) -> f32 {
        self(point)
    }
}
