//! Read-only adjacency queries a polygon mesh exposes to the verifier.

/// Capability interface of a polygon mesh with dense element ids.
///
/// Per-id accessors may panic on ids outside `0..num_*()`; callers range-check
/// first. Lists may be ordered (p2v is the boundary loop) or unordered.
pub trait PolyMeshAdjacency {
    fn num_verts(&self) -> usize;
    fn num_edges(&self) -> usize;
    fn num_polys(&self) -> usize;

    /// Vertices sharing an edge with `vid`.
    fn adj_v2v(&self, vid: usize) -> &[usize];
    /// Edges incident to `vid`.
    fn adj_v2e(&self, vid: usize) -> &[usize];
    /// Polygons incident to `vid`.
    fn adj_v2p(&self, vid: usize) -> &[usize];

    /// Endpoint `slot` (0 or 1) of edge `eid`.
    fn edge_vert_id(&self, eid: usize, slot: usize) -> usize;
    fn edge_contains_vert(&self, eid: usize, vid: usize) -> bool {
        self.edge_vert_id(eid, 0) == vid || self.edge_vert_id(eid, 1) == vid
    }
    /// Polygons incident to edge `eid`.
    fn adj_e2p(&self, eid: usize) -> &[usize];

    /// Boundary vertices of `pid`, in loop order.
    fn adj_p2v(&self, pid: usize) -> &[usize];
    /// Boundary edges of `pid`.
    fn adj_p2e(&self, pid: usize) -> &[usize];
    /// Polygons sharing an edge with `pid`.
    fn adj_p2p(&self, pid: usize) -> &[usize];
    /// Flattened triangles (vertex ids, three per triangle) covering `pid`.
    fn poly_tessellation(&self, pid: usize) -> &[usize];
}
