//! Violation taxonomy and the report produced by a topology check.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mesh element kinds addressed by adjacency relations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Vertex,
    Edge,
    Polygon,
}

impl ElementKind {
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Vertex => "vertex",
            ElementKind::Edge => "edge",
            ElementKind::Polygon => "polygon",
        }
    }
}

/// Adjacency relations checked by the verifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    #[serde(rename = "v2v")]
    V2V,
    #[serde(rename = "v2e")]
    V2E,
    #[serde(rename = "v2p")]
    V2P,
    #[serde(rename = "e2p")]
    E2P,
    #[serde(rename = "p2v")]
    P2V,
    #[serde(rename = "p2e")]
    P2E,
    #[serde(rename = "p2p")]
    P2P,
    #[serde(rename = "edge_verts")]
    EdgeVerts,
    #[serde(rename = "tessellation")]
    Tessellation,
}

impl Relation {
    pub fn name(self) -> &'static str {
        match self {
            Relation::V2V => "v2v",
            Relation::V2E => "v2e",
            Relation::V2P => "v2p",
            Relation::E2P => "e2p",
            Relation::P2V => "p2v",
            Relation::P2E => "p2e",
            Relation::P2P => "p2p",
            Relation::EdgeVerts => "edge_verts",
            Relation::Tessellation => "tessellation",
        }
    }

    /// Kind of the element that owns the list.
    pub fn source(self) -> ElementKind {
        match self {
            Relation::V2V | Relation::V2E | Relation::V2P => ElementKind::Vertex,
            Relation::E2P | Relation::EdgeVerts => ElementKind::Edge,
            Relation::P2V | Relation::P2E | Relation::P2P | Relation::Tessellation => {
                ElementKind::Polygon
            }
        }
    }

    /// Kind of the ids stored in the list.
    pub fn target(self) -> ElementKind {
        match self {
            Relation::V2V | Relation::EdgeVerts | Relation::P2V | Relation::Tessellation => {
                ElementKind::Vertex
            }
            Relation::V2E | Relation::P2E => ElementKind::Edge,
            Relation::V2P | Relation::E2P | Relation::P2P => ElementKind::Polygon,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A broken adjacency invariant, with enough context to locate it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopologyViolation {
    /// `relation(owner)` lists `id`, but `id >= limit` for its element kind.
    OutOfRange {
        relation: Relation,
        owner: usize,
        id: usize,
        limit: usize,
    },
    /// Endpoint `slot` of `edge` is not a valid vertex id.
    EdgeEndpointOutOfRange {
        edge: usize,
        slot: usize,
        vertex: usize,
        num_verts: usize,
    },
    /// `b ∈ relation(a)` but `a ∉ relation(b)` for a self-inverse relation.
    Asymmetric { relation: Relation, a: usize, b: usize },
    /// `id ∈ relation(owner)` but `owner ∉ inverse(id)`.
    MissingInverse {
        relation: Relation,
        inverse: Relation,
        owner: usize,
        id: usize,
    },
    /// The tessellation of `poly` uses `vertex`, which is not on its boundary.
    TessellationOutsidePolygon { poly: usize, vertex: usize },
}

impl TopologyViolation {
    /// Relation whose list contained the offending entry.
    pub fn relation(&self) -> Relation {
        match self {
            TopologyViolation::OutOfRange { relation, .. }
            | TopologyViolation::Asymmetric { relation, .. }
            | TopologyViolation::MissingInverse { relation, .. } => *relation,
            TopologyViolation::EdgeEndpointOutOfRange { .. } => Relation::EdgeVerts,
            TopologyViolation::TessellationOutsidePolygon { .. } => Relation::Tessellation,
        }
    }

    /// Element that owns the offending list.
    pub fn element(&self) -> (ElementKind, usize) {
        let owner = match self {
            TopologyViolation::OutOfRange { owner, .. }
            | TopologyViolation::MissingInverse { owner, .. } => *owner,
            TopologyViolation::Asymmetric { a, .. } => *a,
            TopologyViolation::EdgeEndpointOutOfRange { edge, .. } => *edge,
            TopologyViolation::TessellationOutsidePolygon { poly, .. } => *poly,
        };
        (self.relation().source(), owner)
    }
}

impl fmt::Display for TopologyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologyViolation::OutOfRange {
                relation,
                owner,
                id,
                limit,
            } => write!(
                f,
                "{relation} of {} {owner} lists {} {id}, out of range (< {limit} required)",
                relation.source().name(),
                relation.target().name(),
            ),
            TopologyViolation::EdgeEndpointOutOfRange {
                edge,
                slot,
                vertex,
                num_verts,
            } => write!(
                f,
                "edge {edge} endpoint {slot} is vertex {vertex}, out of range (< {num_verts} required)"
            ),
            TopologyViolation::Asymmetric { relation, a, b } => {
                let kind = relation.source().name();
                write!(
                    f,
                    "{relation} not symmetric: {kind} {a} lists {kind} {b} but not vice versa"
                )
            }
            TopologyViolation::MissingInverse {
                relation,
                inverse,
                owner,
                id,
            } => write!(
                f,
                "{relation} of {} {owner} lists {} {id}, but {inverse} of {id} does not list {owner}",
                relation.source().name(),
                relation.target().name(),
            ),
            TopologyViolation::TessellationOutsidePolygon { poly, vertex } => write!(
                f,
                "tessellation of polygon {poly} uses vertex {vertex}, which is not in its p2v"
            ),
        }
    }
}

impl std::error::Error for TopologyViolation {}

/// Outcome of a topology check.
///
/// Invariants:
/// - `violations` is in discovery order (vertex pass, edge pass, polygon pass).
/// - `halted` is true when the walk stopped because the collector filled up.
///   Checks after the last recorded violation were skipped; when that violation
///   came from the very last check, nothing was skipped but `halted` is still set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyReport {
    pub num_verts: usize,
    pub num_edges: usize,
    pub num_polys: usize,
    pub violations: Vec<TopologyViolation>,
    pub halted: bool,
}

impl TopologyReport {
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// First violation found, if any.
    pub fn into_result(self) -> Result<(), TopologyViolation> {
        match self.violations.into_iter().next() {
            Some(v) => Err(v),
            None => Ok(()),
        }
    }
}

impl fmt::Display for TopologyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "topology check: {} verts, {} edges, {} polys",
            self.num_verts, self.num_edges, self.num_polys
        )?;
        if self.is_valid() {
            return writeln!(f, "  passed");
        }
        writeln!(f, "  {} violation(s):", self.violations.len())?;
        for v in &self.violations {
            writeln!(f, "  - {v}")?;
        }
        if self.halted {
            writeln!(f, "  (stopped early; checks after the last violation were skipped)")?;
        }
        Ok(())
    }
}
