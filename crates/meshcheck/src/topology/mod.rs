//! Polygon-mesh topology verifier.
//!
//! Purpose
//! - Act as the structural invariant oracle for mesh code: walk every vertex,
//!   edge and polygon of a mesh snapshot and cross-check each adjacency relation
//!   against its inverse or sibling relation.
//!
//! Why this design (short)
//! - The verifier only needs read access, so it is generic over the small
//!   `PolyMeshAdjacency` capability trait instead of a concrete mesh type.
//! - Violations are typed values, not assertions. Tests and debug builds decide
//!   how loud a failure is.
//! - Two modes: fail-fast (first violation wins) and exhaustive (collect every
//!   violation, optionally capped).
//!
//! Assumptions and conventions
//! - Ids are dense: vertices `0..num_verts`, edges `0..num_edges`, polygons
//!   `0..num_polys`.
//! - Membership tests are linear scans of neighbour lists; meshes have bounded
//!   degree, so a full check is linear in the total adjacency size.
//! - Accessors are only called with ids that passed a range check.
//!
//! Code cross-refs: `PolyMeshAdjacency`, `MeshSnapshot`, `check_topology`,
//! `audit_topology`, `TopologyViolation`.

mod adjacency;
mod snapshot;
mod verify;
mod violation;

pub use adjacency::PolyMeshAdjacency;
pub use snapshot::{MeshSnapshot, ShapeError};
pub use verify::{audit_topology, check_topology, check_topology_with, CheckCfg, CheckMode};
pub use violation::{ElementKind, Relation, TopologyReport, TopologyViolation};
