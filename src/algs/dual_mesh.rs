//! Build the polygonal *dual mesh* of a triangle mesh.
//
// Every primal triangle becomes a dual vertex at its barycenter, and every
// primal vertex becomes a dual face whose corners are the barycenters of
// its incident triangles, in one-ring order.
//
// Boundary vertices only see an open fan of triangles. Their dual face is
// *clipped* to the primal boundary by three extra corners:
//
// * the midpoint of the last boundary edge of the ring,
// * the primal vertex itself,
// * the midpoint of the first boundary edge of the ring.
//
// Dual vertices are laid out as
//
//   [0, F)                      triangle barycenters, in face order
//   [F, F + Bv)                 boundary vertex copies, in vertex order
//   [F + Bv, F + Bv + Be)       boundary edge midpoints, in edge order

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::algs::boundary::classify_boundary;
use crate::mesh_error::MeshError;
use crate::topology::adjacency::SurfaceGeometry;
use crate::topology::ids::{EdgeId, VertId};
use crate::topology::one_ring::vert_ordered_one_ring;
use crate::topology::queries::SurfaceQueries;
use crate::topology::surface_mesh::SurfaceMesh;

/// Options for [`build_dual`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DualMeshOpts {
    /// Emit clipped cells for boundary vertices instead of dropping them.
    pub include_clipped_cells: bool,
}

impl Default for DualMeshOpts {
    fn default() -> Self {
        Self {
            include_clipped_cells: true,
        }
    }
}

/// Dual vertex positions and dual polygons (indices into `vertices`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DualMesh {
    pub vertices: Vec<[f64; 3]>,
    pub faces: Vec<Vec<usize>>,
}

impl DualMesh {
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Wrap the dual into a [`SurfaceMesh`] with full adjacency.
    pub fn into_surface_mesh(self) -> Result<SurfaceMesh, MeshError> {
        SurfaceMesh::new(self.vertices, self.faces)
    }
}

/// Build the dual of the triangle mesh `primal`.
///
/// Fails with [`MeshError::NotTriangleMesh`] on any non-triangular face, and
/// with the one-ring errors on non-manifold vertices that get a dual face.
/// Vertices without incident edges never get a dual face.
pub fn build_dual<M>(primal: &M, opts: DualMeshOpts) -> Result<DualMesh, MeshError>
where
    M: SurfaceGeometry + ?Sized,
{
    for f in primal.face_ids() {
        let verts = primal.verts_per_face(f);
        if verts != 3 {
            return Err(MeshError::NotTriangleMesh { face: f, verts });
        }
    }

    // 1. triangle barycenters
    let mut vertices: Vec<[f64; 3]> = primal
        .face_ids()
        .map(|f| primal.face_barycenter(f))
        .collect();

    // 2. + 3. boundary fix-up vertices
    let boundary = classify_boundary(primal);
    let mut v2dual: HashMap<VertId, usize> = HashMap::with_capacity(boundary.boundary_verts.len());
    for &v in &boundary.boundary_verts {
        v2dual.insert(v, vertices.len());
        vertices.push(primal.vert_pos(v));
    }
    let mut e2dual: HashMap<EdgeId, usize> = HashMap::with_capacity(boundary.boundary_edges.len());
    for &e in &boundary.boundary_edges {
        e2dual.insert(e, vertices.len());
        vertices.push(primal.edge_midpoint(e));
    }

    // 4. one polygon per admitted primal vertex
    let mut faces = Vec::with_capacity(primal.num_verts());
    for v in primal.vert_ids() {
        let clipped = primal.vert_is_boundary(v);
        if clipped && !opts.include_clipped_cells {
            continue;
        }
        let ring = vert_ordered_one_ring(primal, v)?;
        if ring.is_empty() {
            continue;
        }

        let mut face: Vec<usize> = ring.faces.iter().map(|f| f.index()).collect();
        if clipped {
            if let (Some(first), Some(last)) = (ring.edges.first(), ring.edges.last()) {
                face.push(fixup_index(&e2dual, last)?);
                face.push(fixup_index(&v2dual, &v)?);
                face.push(fixup_index(&e2dual, first)?);
            }
        }
        faces.push(face);
    }

    log::debug!(
        "built dual mesh: {} vertices, {} faces",
        vertices.len(),
        faces.len()
    );
    log::trace!(
        "dual vertex layout: {} barycenters, {} boundary vertices, {} boundary edges",
        primal.num_faces(),
        boundary.boundary_verts.len(),
        boundary.boundary_edges.len()
    );

    Ok(DualMesh { vertices, faces })
}

/// Same as [`build_dual`], returned as a ready [`SurfaceMesh`].
pub fn build_dual_mesh<M>(primal: &M, opts: DualMeshOpts) -> Result<SurfaceMesh, MeshError>
where
    M: SurfaceGeometry + ?Sized,
{
    build_dual(primal, opts)?.into_surface_mesh()
}

fn fixup_index<K>(map: &HashMap<K, usize>, key: &K) -> Result<usize, MeshError>
where
    K: std::hash::Hash + Eq + std::fmt::Debug,
{
    map.get(key).copied().ok_or_else(|| {
        MeshError::InvariantViolation(format!("no boundary fix-up vertex recorded for {key:?}"))
    })
}
