//! Segment geometry and polygon-mesh topology checks.
//!
//! Two independent leaves consumed by mesh-processing code:
//! - `geom3`: directed 3D segments (distance, projection membership, direction,
//!   two-plane decomposition) and point-normal planes.
//! - `topology`: a read-only verifier that cross-checks every adjacency relation
//!   of a polygon mesh against its inverse, generic over `PolyMeshAdjacency`.
//!
//! API Policy
//! - Callers import from `api` or the module re-exports below. Module internals
//!   (`geom3::cfg`, verifier passes) are private and may change freely.

pub mod api;
pub mod geom3;
pub mod topology;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom3::{GeomError, Plane, Segment};
pub use nalgebra::{Point3, Vector3};
pub use topology::{audit_topology, check_topology, MeshSnapshot, PolyMeshAdjacency};
