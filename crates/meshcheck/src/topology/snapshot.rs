//! Owned adjacency snapshot (serde transport format for tools and tests).
//!
//! A snapshot stores every relation exactly as a mesh engine reports it; it does
//! not derive one relation from another. Element counts come from list lengths.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::adjacency::PolyMeshAdjacency;

/// Plain per-element adjacency lists of a polygon mesh.
///
/// Invariants reported by `shape_errors` (the `PolyMeshAdjacency` impl reads a
/// missing list as empty, so a misshapen snapshot still gets checked):
/// - `v2e`, `v2p` have one list per vertex (`v2v.len()` vertices);
/// - `e2p` has one list per edge (`edges.len()` edges);
/// - `p2e`, `p2p`, `tessellation` have one list per polygon (`p2v.len()` polygons);
/// - each tessellation is a whole number of triangles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshSnapshot {
    pub v2v: Vec<Vec<usize>>,
    pub v2e: Vec<Vec<usize>>,
    pub v2p: Vec<Vec<usize>>,
    pub edges: Vec<[usize; 2]>,
    pub e2p: Vec<Vec<usize>>,
    pub p2v: Vec<Vec<usize>>,
    pub p2e: Vec<Vec<usize>>,
    pub p2p: Vec<Vec<usize>>,
    pub tessellation: Vec<Vec<usize>>,
}

/// A snapshot list whose shape does not match the element counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    LengthMismatch {
        list: &'static str,
        len: usize,
        expected: usize,
    },
    TessellationNotTriangles { poly: usize, len: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::LengthMismatch {
                list,
                len,
                expected,
            } => write!(f, "list `{list}` has {len} entries, expected {expected}"),
            ShapeError::TessellationNotTriangles { poly, len } => write!(
                f,
                "tessellation of polygon {poly} has {len} ids, not a multiple of 3"
            ),
        }
    }
}

impl std::error::Error for ShapeError {}

impl MeshSnapshot {
    /// Every list whose length disagrees with the element counts.
    ///
    /// The verifier never sees these: rows past the end of a short list read as
    /// empty and rows past the element count are never visited.
    pub fn shape_errors(&self) -> Vec<ShapeError> {
        let (nv, ne, np) = (self.v2v.len(), self.edges.len(), self.p2v.len());
        let lists: [(&'static str, usize, usize); 6] = [
            ("v2e", self.v2e.len(), nv),
            ("v2p", self.v2p.len(), nv),
            ("e2p", self.e2p.len(), ne),
            ("p2e", self.p2e.len(), np),
            ("p2p", self.p2p.len(), np),
            ("tessellation", self.tessellation.len(), np),
        ];
        let mut out: Vec<ShapeError> = lists
            .into_iter()
            .filter(|&(_, len, expected)| len != expected)
            .map(|(list, len, expected)| ShapeError::LengthMismatch {
                list,
                len,
                expected,
            })
            .collect();
        for (poly, tris) in self.tessellation.iter().enumerate() {
            if tris.len() % 3 != 0 {
                out.push(ShapeError::TessellationNotTriangles {
                    poly,
                    len: tris.len(),
                });
            }
        }
        out
    }
}

/// Row `id` of a per-element list; a missing row reads as empty.
#[inline]
fn row(lists: &[Vec<usize>], id: usize) -> &[usize] {
    lists.get(id).map_or(&[][..], Vec::as_slice)
}

impl PolyMeshAdjacency for MeshSnapshot {
    fn num_verts(&self) -> usize {
        self.v2v.len()
    }
    fn num_edges(&self) -> usize {
        self.edges.len()
    }
    fn num_polys(&self) -> usize {
        self.p2v.len()
    }
    fn adj_v2v(&self, vid: usize) -> &[usize] {
        row(&self.v2v, vid)
    }
    fn adj_v2e(&self, vid: usize) -> &[usize] {
        row(&self.v2e, vid)
    }
    fn adj_v2p(&self, vid: usize) -> &[usize] {
        row(&self.v2p, vid)
    }
    /// `usize::MAX` for a missing edge or slot, which the edge pass reports as
    /// out of range.
    fn edge_vert_id(&self, eid: usize, slot: usize) -> usize {
        self.edges
            .get(eid)
            .and_then(|e| e.get(slot))
            .copied()
            .unwrap_or(usize::MAX)
    }
    fn adj_e2p(&self, eid: usize) -> &[usize] {
        row(&self.e2p, eid)
    }
    fn adj_p2v(&self, pid: usize) -> &[usize] {
        row(&self.p2v, pid)
    }
    fn adj_p2e(&self, pid: usize) -> &[usize] {
        row(&self.p2e, pid)
    }
    fn adj_p2p(&self, pid: usize) -> &[usize] {
        row(&self.p2p, pid)
    }
    fn poly_tessellation(&self, pid: usize) -> &[usize] {
        row(&self.tessellation, pid)
    }
}
