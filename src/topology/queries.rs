//! Local structural queries over a [`SurfaceAdjacency`].
//!
//! [`SurfaceQueries`] is blanket-implemented for every adjacency provider,
//! so any mesh that exposes the incidence lists gets boundary tests,
//! shared-element lookups and the ordered one-ring for free.

use crate::mesh_error::MeshError;
use crate::topology::adjacency::{SurfaceAdjacency, SurfaceGeometry};
use crate::topology::ids::{EdgeId, FaceId, VertId};
use crate::topology::one_ring::{self, OneRing};

/// Extension methods answering local topology questions.
///
/// All methods are read-only.
pub trait SurfaceQueries: SurfaceAdjacency {
    /// The endpoint of `e` that is not `v`.
    fn vert_opposite_to(&self, e: EdgeId, v: VertId) -> Result<VertId, MeshError> {
        let [a, b] = self.edge_verts(e);
        if a == v {
            Ok(b)
        } else if b == v {
            Ok(a)
        } else {
            Err(MeshError::EdgeMissingVertex { edge: e, vertex: v })
        }
    }

    /// `true` if `e` has fewer than 2 incident faces.
    #[inline]
    fn edge_is_boundary(&self, e: EdgeId) -> bool {
        self.adj_e2f(e).len() < 2
    }

    /// `true` if `e` has at most 2 incident faces.
    #[inline]
    fn edge_is_manifold(&self, e: EdgeId) -> bool {
        self.adj_e2f(e).len() <= 2
    }

    /// `true` if any edge incident to `v` is a boundary edge.
    fn vert_is_boundary(&self, v: VertId) -> bool {
        self.adj_v2e(v).iter().any(|&e| self.edge_is_boundary(e))
    }

    /// Boundary edges incident to `v`, in `adj_v2e` order.
    fn vert_boundary_edges(&self, v: VertId) -> Vec<EdgeId> {
        self.adj_v2e(v)
            .iter()
            .copied()
            .filter(|&e| self.edge_is_boundary(e))
            .collect()
    }

    /// `true` if `curr` immediately follows `prev` in the vertex cycle of `f`.
    ///
    /// Returns `false` when either vertex is not in `f`.
    fn verts_are_ccw(&self, f: FaceId, curr: VertId, prev: VertId) -> bool {
        match (self.face_vert_offset(f, prev), self.face_vert_offset(f, curr)) {
            (Some(p), Some(c)) => c == (p + 1) % self.verts_per_face(f),
            _ => false,
        }
    }

    /// `true` if some face is incident to both edges.
    fn edges_share_face(&self, e0: EdgeId, e1: EdgeId) -> bool {
        self.face_shared(e0, e1).is_some()
    }

    /// The two vertices shared by `f0` and `f1`, in the cycle order of `f0`.
    fn edge_shared(&self, f0: FaceId, f1: FaceId) -> Result<(VertId, VertId), MeshError> {
        let shared: Vec<VertId> = self
            .face_verts(f0)
            .iter()
            .copied()
            .filter(|&v| self.face_contains_vert(f1, v))
            .collect();
        match shared.as_slice() {
            &[a, b] => Ok((a, b)),
            _ => Err(MeshError::FacesDoNotShareEdge {
                a: f0,
                b: f1,
                shared: shared.len(),
            }),
        }
    }

    /// The first face incident to both `e0` and `e1`.
    fn face_shared(&self, e0: EdgeId, e1: EdgeId) -> Option<FaceId> {
        let faces1 = self.adj_e2f(e1);
        self.adj_e2f(e0)
            .iter()
            .copied()
            .find(|f| faces1.contains(f))
    }

    /// The face across the edge `(a, b)` of `f`.
    ///
    /// `Ok(None)` means `(a, b)` is a boundary edge. The edge must be
    /// manifold.
    fn face_adjacent_along(
        &self,
        f: FaceId,
        a: VertId,
        b: VertId,
    ) -> Result<Option<FaceId>, MeshError> {
        let e = self
            .face_edge(f, a, b)
            .ok_or(MeshError::MissingEdge { face: f, a, b })?;
        if !self.edge_is_manifold(e) {
            return Err(MeshError::NonManifoldEdge {
                edge: e,
                incident_faces: self.adj_e2f(e).len(),
            });
        }
        Ok(self.adj_e2f(e).iter().copied().find(|&g| g != f))
    }

    /// `true` if any edge of `f` is a boundary edge.
    fn face_is_boundary(&self, f: FaceId) -> bool {
        self.adj_f2e(f).iter().any(|&e| self.edge_is_boundary(e))
    }

    /// Share of the surrounding area attributed to `v`: every incident face
    /// contributes its area divided by its vertex count.
    fn vert_area(&self, v: VertId) -> f64
    where
        Self: SurfaceGeometry,
    {
        self.adj_v2f(v)
            .iter()
            .map(|&f| self.face_area(f) / self.verts_per_face(f) as f64)
            .sum()
    }

    #[inline]
    fn vert_mass(&self, v: VertId) -> f64
    where
        Self: SurfaceGeometry,
    {
        self.vert_area(v)
    }

    #[inline]
    fn face_mass(&self, f: FaceId) -> f64
    where
        Self: SurfaceGeometry,
    {
        self.face_area(f)
    }

    /// See [`one_ring::vert_ordered_one_ring`].
    fn vert_ordered_one_ring(&self, v: VertId) -> Result<OneRing, MeshError> {
        one_ring::vert_ordered_one_ring(self, v)
    }

    fn vert_ordered_vert_ring(&self, v: VertId) -> Result<Vec<VertId>, MeshError> {
        one_ring::vert_ordered_vert_ring(self, v)
    }

    fn vert_ordered_face_ring(&self, v: VertId) -> Result<Vec<FaceId>, MeshError> {
        one_ring::vert_ordered_face_ring(self, v)
    }

    fn vert_ordered_edge_ring(&self, v: VertId) -> Result<Vec<EdgeId>, MeshError> {
        one_ring::vert_ordered_edge_ring(self, v)
    }

    fn vert_ordered_edge_link(&self, v: VertId) -> Result<Vec<EdgeId>, MeshError> {
        one_ring::vert_ordered_edge_link(self, v)
    }
}

impl<M: SurfaceAdjacency + ?Sized> SurfaceQueries for M {}
