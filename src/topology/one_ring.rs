//! Winding-ordered one-ring traversal around a vertex.
//!
//! The walk starts from one incident edge, picks the incident face in which
//! the opposite vertex directly follows the center, and then hops from face
//! to face across the edges incident to the center. Every face visited
//! keeps that orientation, so all outputs come out in the mesh's CCW order.
//!
//! For a boundary vertex the incident faces form an open fan. The walk must
//! then start at the fan end whose boundary edge is followed (not preceded)
//! by the center's outgoing direction, otherwise it would hit the other
//! boundary edge half way and miss the faces behind it.
//!
//! The loop is bounded by the number of edges incident to the center.
//! Meshes that break the manifold assumptions (an edge with more than two
//! faces, a vertex with more than two boundary edges, several fans sharing
//! one vertex, flipped faces) are reported as errors instead of being
//! walked into a truncated or repeating ring.

use serde::{Deserialize, Serialize};

use crate::mesh_error::MeshError;
use crate::topology::adjacency::SurfaceAdjacency;
use crate::topology::ids::{EdgeId, FaceId, VertId};
use crate::topology::queries::SurfaceQueries;

/// Ordered neighbourhood of a vertex.
///
/// For a triangle mesh:
/// - interior vertex: `verts`, `faces`, `edges` and `link` have equal
///   length and close cyclically; `edges[i]` joins `center` and `verts[i]`,
///   and `faces[i]` is `(center, verts[i], verts[i + 1])`.
/// - boundary vertex: `verts` and `edges` have one more entry than `faces`,
///   and `edges` starts and ends on the two boundary edges.
///
/// For larger polygons `verts` lists every vertex of each face except the
/// center, so it grows by `verts_per_face - 2` per face.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneRing {
    pub center: VertId,
    /// Adjacent vertices.
    pub verts: Vec<VertId>,
    /// Incident faces.
    pub faces: Vec<FaceId>,
    /// Incident edges.
    pub edges: Vec<EdgeId>,
    /// Edges of the incident faces that do not touch `center`.
    pub link: Vec<EdgeId>,
}

impl OneRing {
    /// An empty ring, as returned for an isolated vertex.
    pub fn empty(center: VertId) -> Self {
        OneRing {
            center,
            ..Default::default()
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// `true` for a non-empty ring that closes back onto its first edge.
    ///
    /// Only meaningful for triangle meshes.
    #[inline]
    pub fn is_closed(&self) -> bool {
        !self.is_empty() && self.edges.len() == self.faces.len()
    }
}

/// Computes the ordered one-ring of `v`.
///
/// An isolated vertex yields an empty ring. Every contract violation met
/// during the walk is returned immediately; no partial ring is ever
/// produced.
pub fn vert_ordered_one_ring<M>(mesh: &M, v: VertId) -> Result<OneRing, MeshError>
where
    M: SurfaceAdjacency + ?Sized,
{
    let incident = mesh.adj_v2e(v);
    let expected = incident.len();
    if expected == 0 {
        return Ok(OneRing::empty(v));
    }

    ensure_manifold(mesh, incident[0])?;
    let b_edges = mesh.vert_boundary_edges(v);
    let (mut curr_e, mut curr_f, mut curr_v) = match b_edges.as_slice() {
        [] => start_wedge(mesh, v, incident[0])?,
        &[front, back] => boundary_start_wedge(mesh, v, front, back)?,
        _ => {
            return Err(MeshError::NonManifoldVertex {
                vertex: v,
                boundary_edges: b_edges.len(),
            });
        }
    };

    let mut ring = OneRing::empty(v);
    let start_e = curr_e;
    loop {
        ring.edges.push(curr_e);
        ring.faces.push(curr_f);

        // every vertex of curr_f from curr_v up to, but excluding, v
        let off = mesh
            .face_vert_offset(curr_f, curr_v)
            .ok_or(MeshError::InconsistentWinding {
                vertex: v,
                face: curr_f,
            })?;
        let n = mesh.verts_per_face(curr_f);
        for i in 0..n - 1 {
            let next_v = mesh.face_vert(curr_f, off + i);
            if i > 0 {
                let link_e = mesh.face_edge(curr_f, curr_v, next_v).ok_or(
                    MeshError::MissingEdge {
                        face: curr_f,
                        a: curr_v,
                        b: next_v,
                    },
                )?;
                ring.link.push(link_e);
            }
            ring.verts.push(next_v);
            curr_v = next_v;
        }

        let next_e = mesh
            .face_edge(curr_f, v, curr_v)
            .ok_or(MeshError::MissingEdge {
                face: curr_f,
                a: v,
                b: curr_v,
            })?;
        ensure_manifold(mesh, next_e)?;

        if mesh.edge_is_boundary(next_e) {
            // end of the open fan: keep the last vertex, it has no next face
            ring.edges.push(next_e);
            break;
        }

        // the next face starts from this vertex again
        ring.verts.pop();

        if next_e == start_e {
            break;
        }
        if ring.edges.len() >= expected {
            return Err(MeshError::OneRingIncomplete {
                vertex: v,
                visited: ring.edges.len() + 1,
                expected,
            });
        }

        let faces = mesh.adj_e2f(next_e);
        let next_f = if faces[0] == curr_f { faces[1] } else { faces[0] };
        if !mesh.verts_are_ccw(next_f, curr_v, v) {
            return Err(MeshError::InconsistentWinding {
                vertex: v,
                face: next_f,
            });
        }
        curr_e = next_e;
        curr_f = next_f;
    }

    if ring.edges.len() != expected {
        return Err(MeshError::OneRingIncomplete {
            vertex: v,
            visited: ring.edges.len(),
            expected,
        });
    }

    log::trace!(
        "one-ring of vertex {v}: {} faces, {} edges",
        ring.faces.len(),
        ring.edges.len()
    );
    Ok(ring)
}

/// Adjacent vertices of `v`, in ring order.
pub fn vert_ordered_vert_ring<M>(mesh: &M, v: VertId) -> Result<Vec<VertId>, MeshError>
where
    M: SurfaceAdjacency + ?Sized,
{
    Ok(vert_ordered_one_ring(mesh, v)?.verts)
}

/// Incident faces of `v`, in ring order.
pub fn vert_ordered_face_ring<M>(mesh: &M, v: VertId) -> Result<Vec<FaceId>, MeshError>
where
    M: SurfaceAdjacency + ?Sized,
{
    Ok(vert_ordered_one_ring(mesh, v)?.faces)
}

/// Incident edges of `v`, in ring order.
pub fn vert_ordered_edge_ring<M>(mesh: &M, v: VertId) -> Result<Vec<EdgeId>, MeshError>
where
    M: SurfaceAdjacency + ?Sized,
{
    Ok(vert_ordered_one_ring(mesh, v)?.edges)
}

/// Edges opposite to `v`, in ring order.
pub fn vert_ordered_edge_link<M>(mesh: &M, v: VertId) -> Result<Vec<EdgeId>, MeshError>
where
    M: SurfaceAdjacency + ?Sized,
{
    Ok(vert_ordered_one_ring(mesh, v)?.link)
}

/// One-rings of every vertex, indexed by vertex.
#[cfg(not(feature = "rayon"))]
pub fn all_one_rings<M>(mesh: &M) -> Result<Vec<OneRing>, MeshError>
where
    M: SurfaceAdjacency + ?Sized,
{
    mesh.vert_ids()
        .map(|v| vert_ordered_one_ring(mesh, v))
        .collect()
}

/// One-rings of every vertex, indexed by vertex, computed in parallel.
#[cfg(feature = "rayon")]
pub fn all_one_rings<M>(mesh: &M) -> Result<Vec<OneRing>, MeshError>
where
    M: SurfaceAdjacency + Sync + ?Sized,
{
    use rayon::prelude::*;
    (0..mesh.num_verts())
        .into_par_iter()
        .map(|i| vert_ordered_one_ring(mesh, VertId::new(i)))
        .collect()
}

fn ensure_manifold<M>(mesh: &M, e: EdgeId) -> Result<(), MeshError>
where
    M: SurfaceAdjacency + ?Sized,
{
    let incident_faces = mesh.adj_e2f(e).len();
    match incident_faces {
        0 => Err(MeshError::DanglingEdge(e)),
        1 | 2 => Ok(()),
        _ => Err(MeshError::NonManifoldEdge {
            edge: e,
            incident_faces,
        }),
    }
}

/// Starting `(edge, face, opposite vertex)` for an arbitrary incident edge.
fn start_wedge<M>(mesh: &M, v: VertId, e: EdgeId) -> Result<(EdgeId, FaceId, VertId), MeshError>
where
    M: SurfaceAdjacency + ?Sized,
{
    ensure_manifold(mesh, e)?;
    let opp = mesh.vert_opposite_to(e, v)?;
    let faces = mesh.adj_e2f(e);
    let f = faces
        .iter()
        .copied()
        .find(|&f| mesh.verts_are_ccw(f, opp, v))
        .ok_or(MeshError::InconsistentWinding {
            vertex: v,
            face: faces[0],
        })?;
    Ok((e, f, opp))
}

/// Starting wedge at the fan end whose single face runs `v -> opposite`.
fn boundary_start_wedge<M>(
    mesh: &M,
    v: VertId,
    front: EdgeId,
    back: EdgeId,
) -> Result<(EdgeId, FaceId, VertId), MeshError>
where
    M: SurfaceAdjacency + ?Sized,
{
    for e in [front, back] {
        ensure_manifold(mesh, e)?;
        let f = mesh.adj_e2f(e)[0];
        let opp = mesh.vert_opposite_to(e, v)?;
        if mesh.verts_are_ccw(f, opp, v) {
            return Ok((e, f, opp));
        }
    }
    Err(MeshError::InconsistentWinding {
        vertex: v,
        face: mesh.adj_e2f(back)[0],
    })
}
