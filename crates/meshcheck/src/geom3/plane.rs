//! Plane through a point with a unit normal.

use nalgebra::{Point3, Unit, Vector3};

use super::cfg::{MIN_NORM, PLANE_EPS};
use super::error::GeomError;

/// Plane `{ x : n·(x - p) = 0 }` stored as anchor point plus unit normal.
///
/// Invariants:
/// - `n` has unit length (normalized on construction).
/// - `p` is the anchor the plane was built from; it is not canonicalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub p: Point3<f64>,
    pub n: Unit<Vector3<f64>>,
}

impl Plane {
    /// Build from an anchor and any non-zero normal.
    pub fn new(p: Point3<f64>, normal: Vector3<f64>) -> Result<Self, GeomError> {
        let n = Unit::try_new(normal, MIN_NORM).ok_or(GeomError::degenerate("plane normal"))?;
        Ok(Self { p, n })
    }

    /// Offset `c` in the implicit form `n·x = c`.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.n.dot(&self.p.coords)
    }

    #[inline]
    pub fn signed_distance(&self, x: Point3<f64>) -> f64 {
        self.n.dot(&(x - self.p))
    }

    #[inline]
    pub fn contains_eps(&self, x: Point3<f64>, eps: f64) -> bool {
        self.signed_distance(x).abs() <= eps
    }

    #[inline]
    pub fn contains(&self, x: Point3<f64>) -> bool {
        self.contains_eps(x, PLANE_EPS)
    }
}
