//! Read-only capability traits a surface mesh exposes to the topology engine.
//!
//! [`SurfaceAdjacency`] is the combinatorial half: incidence lists between
//! vertices, edges and faces plus a few face-structure lookups.
//! [`SurfaceGeometry`] adds vertex positions and the derived per-face
//! measures the dual builder and the area queries need.
//!
//! Storage stays on the implementor's side. Ids outside the mesh are a
//! caller bug; accessors may panic on them exactly like slice indexing.

use crate::geometry::metrics;
use crate::topology::ids::{EdgeId, FaceId, VertId};

/// Incidence API of a polygonal surface mesh.
///
/// # Required Methods
/// - element counts
/// - the five adjacency lists (`v2e`, `v2f`, `e2f`, `f2f`, `f2e`)
/// - edge endpoints and face vertex cycles
///
/// # Provided Methods
/// Face-structure lookups (`face_vert_offset`, `edge_between`,
/// `face_edge`, …) derived from the required ones. Implementors with
/// faster lookup tables may override them.
pub trait SurfaceAdjacency {
    /// Number of vertices.
    fn num_verts(&self) -> usize;
    /// Number of edges.
    fn num_edges(&self) -> usize;
    /// Number of faces.
    fn num_faces(&self) -> usize;

    /// Edges incident to `v`.
    fn adj_v2e(&self, v: VertId) -> &[EdgeId];
    /// Faces incident to `v`.
    fn adj_v2f(&self, v: VertId) -> &[FaceId];
    /// Faces incident to `e`.
    fn adj_e2f(&self, e: EdgeId) -> &[FaceId];
    /// Faces sharing an edge with `f`.
    fn adj_f2f(&self, f: FaceId) -> &[FaceId];
    /// Edges of `f`, in the order of its vertex cycle.
    fn adj_f2e(&self, f: FaceId) -> &[EdgeId];

    /// The two endpoints of `e`.
    fn edge_verts(&self, e: EdgeId) -> [VertId; 2];
    /// Vertex cycle of `f` (CCW).
    fn face_verts(&self, f: FaceId) -> &[VertId];

    fn vert_ids(&self) -> impl Iterator<Item = VertId> + '_ {
        (0..self.num_verts()).map(VertId::new)
    }

    fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.num_edges()).map(EdgeId::new)
    }

    fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        (0..self.num_faces()).map(FaceId::new)
    }

    #[inline]
    fn verts_per_face(&self, f: FaceId) -> usize {
        self.face_verts(f).len()
    }

    /// Vertex at position `offset` of the cycle of `f`; `offset` wraps around.
    #[inline]
    fn face_vert(&self, f: FaceId, offset: usize) -> VertId {
        let verts = self.face_verts(f);
        verts[offset % verts.len()]
    }

    /// Position of `v` within the cycle of `f`, if `f` contains it.
    fn face_vert_offset(&self, f: FaceId, v: VertId) -> Option<usize> {
        self.face_verts(f).iter().position(|&w| w == v)
    }

    fn face_contains_vert(&self, f: FaceId, v: VertId) -> bool {
        self.face_verts(f).contains(&v)
    }

    fn edge_contains_vert(&self, e: EdgeId, v: VertId) -> bool {
        self.edge_verts(e).contains(&v)
    }

    /// The edge joining `a` and `b`, if any.
    fn edge_between(&self, a: VertId, b: VertId) -> Option<EdgeId> {
        self.adj_v2e(a)
            .iter()
            .copied()
            .find(|&e| self.edge_contains_vert(e, b))
    }

    /// The edge of `f` joining `a` and `b`, if `f` has one.
    fn face_edge(&self, f: FaceId, a: VertId, b: VertId) -> Option<EdgeId> {
        self.adj_f2e(f)
            .iter()
            .copied()
            .find(|&e| self.edge_contains_vert(e, a) && self.edge_contains_vert(e, b))
    }
}

/// Geometric queries layered over [`SurfaceAdjacency`].
pub trait SurfaceGeometry: SurfaceAdjacency {
    /// Position of `v`.
    fn vert_pos(&self, v: VertId) -> [f64; 3];

    /// Mean of the vertices of `f`.
    fn face_barycenter(&self, f: FaceId) -> [f64; 3] {
        let points: Vec<[f64; 3]> = self
            .face_verts(f)
            .iter()
            .map(|&v| self.vert_pos(v))
            .collect();
        metrics::centroid(&points)
    }

    /// Area of `f`, summed over the triangle fan rooted at its first vertex.
    fn face_area(&self, f: FaceId) -> f64 {
        let points: Vec<[f64; 3]> = self
            .face_verts(f)
            .iter()
            .map(|&v| self.vert_pos(v))
            .collect();
        metrics::polygon_area(&points)
    }

    fn edge_midpoint(&self, e: EdgeId) -> [f64; 3] {
        let [a, b] = self.edge_verts(e);
        metrics::midpoint(self.vert_pos(a), self.vert_pos(b))
    }
}
