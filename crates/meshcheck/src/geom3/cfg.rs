//! Tolerance defaults for 3D primitives (internal).
//!
//! Policy
//! - Direction and normal rejection is exact: only a true zero vector counts as
//!   degenerate. Segment deltas are divided by their largest component before
//!   normalizing, so tiny but non-zero segments still get a unit direction.

/// Magnitude at or below which a vector is treated as zero.
pub(crate) const MIN_NORM: f64 = 0.0;
/// Membership epsilon used by `Plane::contains`.
pub(crate) const PLANE_EPS: f64 = 1e-9;
