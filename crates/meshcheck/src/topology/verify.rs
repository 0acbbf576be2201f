//! Exhaustive adjacency cross-checks (vertex, edge and polygon passes).
//!
//! Algorithm
//! - Vertex pass: v2v symmetric, v2e edges contain the vertex, v2p polygons list
//!   the vertex in p2v.
//! - Edge pass: both endpoints are valid vertices, e2p polygons list the edge in p2e.
//! - Polygon pass: p2v/v2p and p2e/e2p agree, p2p symmetric, tessellation only
//!   uses boundary vertices that also list the polygon in v2p.
//!
//! An out-of-range id ends the checks for that list entry (its inverse list
//! cannot be fetched) but not the walk, unless the collector is full.

use tracing::{debug, debug_span, info, warn};

use super::adjacency::PolyMeshAdjacency;
use super::violation::{Relation, TopologyReport, TopologyViolation};

/// How many violations a check collects before it stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckMode {
    /// Stop at the first violation.
    #[default]
    FailFast,
    /// Visit every relation and record every violation found.
    Exhaustive,
}

/// Verifier configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct CheckCfg {
    pub mode: CheckMode,
    /// Exhaustive mode only: stop once this many violations were recorded.
    /// At least one violation is always reported.
    pub max_violations: Option<usize>,
}

impl CheckCfg {
    pub fn exhaustive() -> Self {
        Self {
            mode: CheckMode::Exhaustive,
            max_violations: None,
        }
    }

    fn capacity(&self) -> usize {
        match self.mode {
            CheckMode::FailFast => 1,
            CheckMode::Exhaustive => self.max_violations.unwrap_or(usize::MAX).max(1),
        }
    }
}

/// The collector is full; unwind to the entry point.
struct Halt;

struct Collector {
    capacity: usize,
    violations: Vec<TopologyViolation>,
}

impl Collector {
    fn push(&mut self, violation: TopologyViolation) -> Result<(), Halt> {
        let (kind, id) = violation.element();
        warn!(
            element = kind.name(),
            id,
            relation = violation.relation().name(),
            "{violation}"
        );
        self.violations.push(violation);
        if self.violations.len() >= self.capacity {
            Err(Halt)
        } else {
            Ok(())
        }
    }

    /// Range check for an id listed under `relation` of `owner`.
    fn in_range(
        &mut self,
        relation: Relation,
        owner: usize,
        id: usize,
        limit: usize,
    ) -> Result<bool, Halt> {
        if id < limit {
            return Ok(true);
        }
        self.push(TopologyViolation::OutOfRange {
            relation,
            owner,
            id,
            limit,
        })?;
        Ok(false)
    }
}

/// Check every adjacency invariant and return the first violation, if any.
pub fn check_topology<M: PolyMeshAdjacency + ?Sized>(mesh: &M) -> Result<(), TopologyViolation> {
    check_topology_with(mesh, &CheckCfg::default()).into_result()
}

/// Check every adjacency invariant and report every violation found.
pub fn audit_topology<M: PolyMeshAdjacency + ?Sized>(mesh: &M) -> TopologyReport {
    check_topology_with(mesh, &CheckCfg::exhaustive())
}

/// Run the three passes under `cfg` and summarize the outcome.
pub fn check_topology_with<M: PolyMeshAdjacency + ?Sized>(
    mesh: &M,
    cfg: &CheckCfg,
) -> TopologyReport {
    let (num_verts, num_edges, num_polys) = (mesh.num_verts(), mesh.num_edges(), mesh.num_polys());
    let _span = debug_span!(
        "check_topology",
        verts = num_verts,
        edges = num_edges,
        polys = num_polys
    )
    .entered();

    let mut out = Collector {
        capacity: cfg.capacity(),
        violations: Vec::new(),
    };
    let halted = vertex_pass(mesh, &mut out)
        .and_then(|()| edge_pass(mesh, &mut out))
        .and_then(|()| polygon_pass(mesh, &mut out))
        .is_err();

    let report = TopologyReport {
        num_verts,
        num_edges,
        num_polys,
        violations: out.violations,
        halted,
    };
    if report.is_valid() {
        info!("topology check passed");
    } else {
        info!(
            violations = report.violations.len(),
            halted, "topology check failed"
        );
    }
    report
}

fn vertex_pass<M: PolyMeshAdjacency + ?Sized>(m: &M, out: &mut Collector) -> Result<(), Halt> {
    let (nv, ne, np) = (m.num_verts(), m.num_edges(), m.num_polys());
    for vid in 0..nv {
        for &nbr in m.adj_v2v(vid) {
            if out.in_range(Relation::V2V, vid, nbr, nv)? && !m.adj_v2v(nbr).contains(&vid) {
                out.push(TopologyViolation::Asymmetric {
                    relation: Relation::V2V,
                    a: vid,
                    b: nbr,
                })?;
            }
        }
        for &eid in m.adj_v2e(vid) {
            if out.in_range(Relation::V2E, vid, eid, ne)? && !m.edge_contains_vert(eid, vid) {
                out.push(TopologyViolation::MissingInverse {
                    relation: Relation::V2E,
                    inverse: Relation::EdgeVerts,
                    owner: vid,
                    id: eid,
                })?;
            }
        }
        for &pid in m.adj_v2p(vid) {
            if out.in_range(Relation::V2P, vid, pid, np)? && !m.adj_p2v(pid).contains(&vid) {
                out.push(TopologyViolation::MissingInverse {
                    relation: Relation::V2P,
                    inverse: Relation::P2V,
                    owner: vid,
                    id: pid,
                })?;
            }
        }
    }
    debug!(verts = nv, "vertex pass done");
    Ok(())
}

fn edge_pass<M: PolyMeshAdjacency + ?Sized>(m: &M, out: &mut Collector) -> Result<(), Halt> {
    let (nv, ne, np) = (m.num_verts(), m.num_edges(), m.num_polys());
    for eid in 0..ne {
        for slot in 0..2 {
            let vid = m.edge_vert_id(eid, slot);
            if vid >= nv {
                out.push(TopologyViolation::EdgeEndpointOutOfRange {
                    edge: eid,
                    slot,
                    vertex: vid,
                    num_verts: nv,
                })?;
            }
        }
        for &pid in m.adj_e2p(eid) {
            if out.in_range(Relation::E2P, eid, pid, np)? && !m.adj_p2e(pid).contains(&eid) {
                out.push(TopologyViolation::MissingInverse {
                    relation: Relation::E2P,
                    inverse: Relation::P2E,
                    owner: eid,
                    id: pid,
                })?;
            }
        }
    }
    debug!(edges = ne, "edge pass done");
    Ok(())
}

fn polygon_pass<M: PolyMeshAdjacency + ?Sized>(m: &M, out: &mut Collector) -> Result<(), Halt> {
    let (nv, ne, np) = (m.num_verts(), m.num_edges(), m.num_polys());
    for pid in 0..np {
        for &vid in m.adj_p2v(pid) {
            if out.in_range(Relation::P2V, pid, vid, nv)? && !m.adj_v2p(vid).contains(&pid) {
                out.push(TopologyViolation::MissingInverse {
                    relation: Relation::P2V,
                    inverse: Relation::V2P,
                    owner: pid,
                    id: vid,
                })?;
            }
        }
        for &eid in m.adj_p2e(pid) {
            if out.in_range(Relation::P2E, pid, eid, ne)? && !m.adj_e2p(eid).contains(&pid) {
                out.push(TopologyViolation::MissingInverse {
                    relation: Relation::P2E,
                    inverse: Relation::E2P,
                    owner: pid,
                    id: eid,
                })?;
            }
        }
        for &nbr in m.adj_p2p(pid) {
            if out.in_range(Relation::P2P, pid, nbr, np)? && !m.adj_p2p(nbr).contains(&pid) {
                out.push(TopologyViolation::Asymmetric {
                    relation: Relation::P2P,
                    a: pid,
                    b: nbr,
                })?;
            }
        }
        for &vid in m.poly_tessellation(pid) {
            if !out.in_range(Relation::Tessellation, pid, vid, nv)? {
                continue;
            }
            if !m.adj_v2p(vid).contains(&pid) {
                out.push(TopologyViolation::MissingInverse {
                    relation: Relation::Tessellation,
                    inverse: Relation::V2P,
                    owner: pid,
                    id: vid,
                })?;
            }
            if !m.adj_p2v(pid).contains(&vid) {
                out.push(TopologyViolation::TessellationOutsidePolygon { poly: pid, vertex: vid })?;
            }
        }
    }
    debug!(polys = np, "polygon pass done");
    Ok(())
}
