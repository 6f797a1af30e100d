//! MeshError: Unified error type for mesh-dual public APIs
//!
//! Every contract violation detected by the topology queries, the one-ring
//! walk, or the dual builder is reported through this type. Nothing in the
//! public API panics on malformed mesh data; ids outside the mesh are the
//! one exception and panic like slice indexing.

use thiserror::Error;

use crate::topology::ids::{EdgeId, FaceId, VertId};

/// Unified error type for mesh-dual operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A polygon references a vertex index past the end of the position list.
    #[error("face {face} references vertex {vertex}, but the mesh has {num_verts} vertices")]
    VertexOutOfRange {
        face: usize,
        vertex: usize,
        num_verts: usize,
    },
    /// A polygon has fewer than 3 vertices.
    #[error("face {face} has {verts} vertices (expected at least 3)")]
    DegenerateFace { face: usize, verts: usize },
    /// A polygon lists the same vertex twice.
    #[error("face {face} repeats vertex {vertex}")]
    RepeatedFaceVertex { face: usize, vertex: usize },
    /// An edge was queried for the endpoint opposite to a vertex it does not contain.
    #[error("edge {edge} does not contain vertex {vertex}")]
    EdgeMissingVertex { edge: EdgeId, vertex: VertId },
    /// Two vertices expected to span an edge of `face` do not.
    #[error("face {face} has no edge between vertices {a} and {b}")]
    MissingEdge { face: FaceId, a: VertId, b: VertId },
    /// An edge with more than two incident faces was met where manifoldness is required.
    #[error("edge {edge} is non-manifold ({incident_faces} incident faces)")]
    NonManifoldEdge { edge: EdgeId, incident_faces: usize },
    /// A vertex whose boundary edges do not form a single open fan.
    #[error("vertex {vertex} is non-manifold ({boundary_edges} boundary edges, expected 0 or 2)")]
    NonManifoldVertex { vertex: VertId, boundary_edges: usize },
    /// An edge with no incident face at all.
    #[error("edge {0} has no incident face")]
    DanglingEdge(EdgeId),
    /// No incident face continues the walk around `vertex` in CCW order.
    #[error("face {face} breaks the CCW winding around vertex {vertex}")]
    InconsistentWinding { vertex: VertId, face: FaceId },
    /// The walk around `vertex` closed before visiting every incident edge.
    #[error("one-ring of vertex {vertex} visited {visited} of {expected} incident edges")]
    OneRingIncomplete {
        vertex: VertId,
        visited: usize,
        expected: usize,
    },
    /// Two faces expected to share exactly one edge share `shared` vertices.
    #[error("faces {a} and {b} share {shared} vertices (expected 2)")]
    FacesDoNotShareEdge { a: FaceId, b: FaceId, shared: usize },
    /// The operation needs a pure triangle mesh.
    #[error("face {face} has {verts} vertices, but a triangle mesh is required")]
    NotTriangleMesh { face: FaceId, verts: usize },
    /// Invalid geometric input (e.g. an empty generator domain).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    /// Internal adjacency tables disagree with each other.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}
