//! Boundary classification utilities.
//!
//! These helpers classify vertices and edges as boundary or interior based
//! on the number of faces incident to each edge.

use crate::topology::adjacency::SurfaceAdjacency;
use crate::topology::ids::{EdgeId, VertId};
use crate::topology::queries::SurfaceQueries;

/// Classified boundary/interior element sets, each sorted ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundaryClassification {
    /// Vertices touching at least one boundary edge.
    pub boundary_verts: Vec<VertId>,
    /// Vertices with incident edges, none of them on the boundary.
    pub interior_verts: Vec<VertId>,
    /// Vertices without any incident edge.
    pub isolated_verts: Vec<VertId>,
    /// Edges with fewer than two incident faces.
    pub boundary_edges: Vec<EdgeId>,
}

impl BoundaryClassification {
    /// `true` if the mesh has no boundary edge.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.boundary_edges.is_empty()
    }
}

/// Classify every vertex and edge of `mesh`.
///
/// Edges with **zero or one** incident face are boundary edges; a vertex is
/// a boundary vertex when any of its edges is.
pub fn classify_boundary<M>(mesh: &M) -> BoundaryClassification
where
    M: SurfaceAdjacency + ?Sized,
{
    let mut out = BoundaryClassification::default();

    for v in mesh.vert_ids() {
        if mesh.adj_v2e(v).is_empty() {
            out.isolated_verts.push(v);
        } else if mesh.vert_is_boundary(v) {
            out.boundary_verts.push(v);
        } else {
            out.interior_verts.push(v);
        }
    }
    out.boundary_edges = mesh.edge_ids().filter(|&e| mesh.edge_is_boundary(e)).collect();

    out
}
