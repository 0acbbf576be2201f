//! 3D primitives: directed segments and point-normal planes.
//!
//! Purpose
//! - Local geometric math used by mesh-processing code: point-to-segment
//!   distance, projection membership, and the two-plane decomposition of a
//!   segment's supporting line.
//!
//! Conventions
//! - Everything is `f64`. Comparisons at the clamp boundaries are exact (`<=`),
//!   so a projection landing exactly on an endpoint resolves to that endpoint.
//! - A zero-length segment is representable. Operations that need a direction
//!   either degrade to the zero vector (`Segment::dir`) or fail with
//!   `GeomError::DegenerateGeometry` (`Segment::to_planes`).
//!
//! Code cross-refs: `Segment`, `Plane`, `GeomError`, `cfg`.

pub(crate) mod cfg;
mod error;
mod plane;
mod segment;

pub use error::GeomError;
pub use plane::Plane;
pub use segment::Segment;

#[cfg(test)]
mod tests;
