//! Curated surface for callers (tests, debug builds, tools).
//!
//! Prefer these re-exports over reaching into submodules.

// 3D primitives
pub use crate::geom3::{GeomError, Plane, Segment};
// Topology verifier
pub use crate::topology::{
    audit_topology, check_topology, check_topology_with, CheckCfg, CheckMode, ElementKind,
    MeshSnapshot, PolyMeshAdjacency, Relation, ShapeError, TopologyReport, TopologyViolation,
};

/// Verify `mesh` and panic with the first violation.
///
/// For test suites that treat a broken invariant as a hard failure.
#[track_caller]
pub fn assert_topology<M: PolyMeshAdjacency + ?Sized>(mesh: &M) {
    if let Err(v) = check_topology(mesh) {
        panic!("topology check failed: {}", describe(&v));
    }
}

fn describe(v: &TopologyViolation) -> String {
    let (kind, id) = v.element();
    format!("{v} [{} {id}, {}]", kind.name(), v.relation())
}
