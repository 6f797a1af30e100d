//! In-memory implementation of [`SurfaceAdjacency`] and [`SurfaceGeometry`].
//!
//! [`SurfaceMesh`] stores vertex positions and polygon vertex cycles and
//! derives every adjacency list once, at construction. Edges are numbered
//! in first-seen order while faces are scanned in order, and every list
//! keeps insertion order, so all queries are deterministic for a given input.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshError;
use crate::topology::adjacency::{SurfaceAdjacency, SurfaceGeometry};
use crate::topology::ids::{EdgeId, FaceId, VertId};

/// Polygonal surface mesh with precomputed adjacency.
///
/// Serializes as its positions and polygons only; the adjacency tables are
/// rebuilt (and revalidated) on deserialization.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "MeshParts", try_from = "MeshParts")]
pub struct SurfaceMesh {
    positions: Vec<[f64; 3]>,
    polys: Vec<Vec<VertId>>,
    edges: Vec<[VertId; 2]>,
    v2e: Vec<Vec<EdgeId>>,
    v2f: Vec<Vec<FaceId>>,
    e2f: Vec<Vec<FaceId>>,
    f2e: Vec<Vec<EdgeId>>,
    f2f: Vec<Vec<FaceId>>,
}

/// Serialized form of a [`SurfaceMesh`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshParts {
    pub positions: Vec<[f64; 3]>,
    pub polygons: Vec<Vec<usize>>,
}

impl SurfaceMesh {
    /// Builds a mesh from vertex positions and polygon vertex cycles.
    ///
    /// Every polygon needs at least 3 distinct, in-range vertex indices.
    /// Non-manifold configurations are accepted; use
    /// [`validate_surface_topology`](crate::topology::validation::validate_surface_topology)
    /// to detect them.
    pub fn new(positions: Vec<[f64; 3]>, polygons: Vec<Vec<usize>>) -> Result<Self, MeshError> {
        let num_verts = positions.len();
        let mut polys = Vec::with_capacity(polygons.len());
        for (face, poly) in polygons.into_iter().enumerate() {
            if poly.len() < 3 {
                return Err(MeshError::DegenerateFace {
                    face,
                    verts: poly.len(),
                });
            }
            let mut seen = HashSet::with_capacity(poly.len());
            for &vertex in &poly {
                if vertex >= num_verts {
                    return Err(MeshError::VertexOutOfRange {
                        face,
                        vertex,
                        num_verts,
                    });
                }
                if !seen.insert(vertex) {
                    return Err(MeshError::RepeatedFaceVertex { face, vertex });
                }
            }
            polys.push(poly.into_iter().map(VertId::new).collect());
        }

        let mesh = build_adjacency(positions, polys);
        crate::debug_invariants!(mesh.validate_invariants(), "SurfaceMesh::new");
        log::debug!(
            "built surface mesh: {} vertices, {} edges, {} faces",
            mesh.num_verts(),
            mesh.num_edges(),
            mesh.num_faces()
        );
        Ok(mesh)
    }

    /// Builds a triangle mesh from flat `xyz` coordinates and flat vertex triples.
    pub fn from_flat(coords: &[f64], triangles: &[usize]) -> Result<Self, MeshError> {
        if coords.len() % 3 != 0 {
            return Err(MeshError::InvalidGeometry(format!(
                "coordinate buffer length {} is not a multiple of 3",
                coords.len()
            )));
        }
        if triangles.len() % 3 != 0 {
            return Err(MeshError::InvalidGeometry(format!(
                "triangle buffer length {} is not a multiple of 3",
                triangles.len()
            )));
        }
        let positions = coords.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect();
        let polygons = triangles.chunks_exact(3).map(<[usize]>::to_vec).collect();
        Self::new(positions, polygons)
    }

    /// Vertex positions, indexed by [`VertId`].
    #[inline]
    pub fn positions(&self) -> &[[f64; 3]] {
        &self.positions
    }

    /// Polygon vertex cycles, indexed by [`FaceId`].
    #[inline]
    pub fn polygons(&self) -> &[Vec<VertId>] {
        &self.polys
    }

    /// Number of faces with exactly 3 vertices.
    pub fn num_triangles(&self) -> usize {
        self.polys.iter().filter(|p| p.len() == 3).count()
    }

    /// `true` if every face is a triangle.
    pub fn is_triangle_mesh(&self) -> bool {
        self.polys.iter().all(|p| p.len() == 3)
    }
}

fn build_adjacency(positions: Vec<[f64; 3]>, polys: Vec<Vec<VertId>>) -> SurfaceMesh {
    let num_verts = positions.len();
    let num_faces = polys.len();

    let mut edge_of: HashMap<(VertId, VertId), EdgeId> = HashMap::new();
    let mut edges: Vec<[VertId; 2]> = Vec::new();
    let mut v2e: Vec<Vec<EdgeId>> = vec![Vec::new(); num_verts];
    let mut v2f: Vec<Vec<FaceId>> = vec![Vec::new(); num_verts];
    let mut e2f: Vec<Vec<FaceId>> = Vec::new();
    let mut f2e: Vec<Vec<EdgeId>> = Vec::with_capacity(num_faces);

    for (fi, poly) in polys.iter().enumerate() {
        let f = FaceId::new(fi);
        let mut face_edges = Vec::with_capacity(poly.len());
        for (a, b) in poly.iter().copied().circular_tuple_windows() {
            let key = if a < b { (a, b) } else { (b, a) };
            let e = match edge_of.get(&key) {
                Some(&e) => e,
                None => {
                    let e = EdgeId::new(edges.len());
                    edges.push([key.0, key.1]);
                    e2f.push(Vec::new());
                    v2e[key.0.index()].push(e);
                    v2e[key.1.index()].push(e);
                    edge_of.insert(key, e);
                    e
                }
            };
            e2f[e.index()].push(f);
            face_edges.push(e);
        }
        for &v in poly {
            v2f[v.index()].push(f);
        }
        f2e.push(face_edges);
    }

    // neighbours listed in the order of the face's own edges
    let mut f2f: Vec<Vec<FaceId>> = vec![Vec::new(); num_faces];
    for (fi, face_edges) in f2e.iter().enumerate() {
        let f = FaceId::new(fi);
        for e in face_edges {
            for &g in &e2f[e.index()] {
                if g != f && !f2f[fi].contains(&g) {
                    f2f[fi].push(g);
                }
            }
        }
    }

    SurfaceMesh {
        positions,
        polys,
        edges,
        v2e,
        v2f,
        e2f,
        f2e,
        f2f,
    }
}

impl SurfaceAdjacency for SurfaceMesh {
    #[inline]
    fn num_verts(&self) -> usize {
        self.positions.len()
    }
    #[inline]
    fn num_edges(&self) -> usize {
        self.edges.len()
    }
    #[inline]
    fn num_faces(&self) -> usize {
        self.polys.len()
    }
    #[inline]
    fn adj_v2e(&self, v: VertId) -> &[EdgeId] {
        &self.v2e[v.index()]
    }
    #[inline]
    fn adj_v2f(&self, v: VertId) -> &[FaceId] {
        &self.v2f[v.index()]
    }
    #[inline]
    fn adj_e2f(&self, e: EdgeId) -> &[FaceId] {
        &self.e2f[e.index()]
    }
    #[inline]
    fn adj_f2f(&self, f: FaceId) -> &[FaceId] {
        &self.f2f[f.index()]
    }
    #[inline]
    fn adj_f2e(&self, f: FaceId) -> &[EdgeId] {
        &self.f2e[f.index()]
    }
    #[inline]
    fn edge_verts(&self, e: EdgeId) -> [VertId; 2] {
        self.edges[e.index()]
    }
    #[inline]
    fn face_verts(&self, f: FaceId) -> &[VertId] {
        &self.polys[f.index()]
    }
}

impl SurfaceGeometry for SurfaceMesh {
    #[inline]
    fn vert_pos(&self, v: VertId) -> [f64; 3] {
        self.positions[v.index()]
    }
}

impl DebugInvariants for SurfaceMesh {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "SurfaceMesh");
    }

    fn validate_invariants(&self) -> Result<(), MeshError> {
        let broken = |msg: String| Err(MeshError::InvariantViolation(msg));

        for e in self.edge_ids() {
            for v in self.edge_verts(e) {
                if !self.adj_v2e(v).contains(&e) {
                    return broken(format!("edge {e} missing from v2e of vertex {v}"));
                }
            }
            for &f in self.adj_e2f(e) {
                if !self.adj_f2e(f).contains(&e) {
                    return broken(format!("edge {e} lists face {f}, which does not list it"));
                }
            }
        }
        for f in self.face_ids() {
            let verts = self.face_verts(f);
            if self.adj_f2e(f).len() != verts.len() {
                return broken(format!(
                    "face {f} has {} vertices but {} edges",
                    verts.len(),
                    self.adj_f2e(f).len()
                ));
            }
            for (i, (a, b)) in verts.iter().copied().circular_tuple_windows().enumerate() {
                let e = self.adj_f2e(f)[i];
                if !(self.edge_contains_vert(e, a) && self.edge_contains_vert(e, b)) {
                    return broken(format!("edge {e} of face {f} does not join {a} and {b}"));
                }
            }
            for &g in self.adj_f2f(f) {
                if !self.adj_f2f(g).contains(&f) {
                    return broken(format!("face adjacency {f} -> {g} is not symmetric"));
                }
            }
        }
        for v in self.vert_ids() {
            for &f in self.adj_v2f(v) {
                if !self.face_contains_vert(f, v) {
                    return broken(format!("v2f of vertex {v} lists face {f} not containing it"));
                }
            }
        }
        Ok(())
    }
}

impl From<SurfaceMesh> for MeshParts {
    fn from(mesh: SurfaceMesh) -> Self {
        MeshParts {
            polygons: mesh
                .polys
                .iter()
                .map(|p| p.iter().map(|v| v.index()).collect())
                .collect(),
            positions: mesh.positions,
        }
    }
}

impl TryFrom<MeshParts> for SurfaceMesh {
    type Error = MeshError;

    fn try_from(parts: MeshParts) -> Result<Self, Self::Error> {
        SurfaceMesh::new(parts.positions, parts.polygons)
    }
}
