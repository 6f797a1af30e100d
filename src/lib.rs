//! # mesh-dual
//!
//! mesh-dual is a topology engine for manifold and near-manifold polygonal surface meshes. It answers
//! local-neighborhood queries in consistent winding order and derives the polygonal dual of a triangle mesh.
//!
//! ## Features
//! - Strong `VertId` / `EdgeId` / `FaceId` handles over index-based adjacency
//! - A read-only capability interface (`SurfaceAdjacency`, `SurfaceGeometry`) so any mesh storage can be queried
//! - Boundary, manifoldness and shared-element queries
//! - Winding-ordered one-ring traversal (adjacent vertices, faces, edges and link) for interior and boundary vertices
//! - Dual mesh construction with optional clipped cells along the primal boundary
//!
//! ## Errors
//!
//! Malformed input (non-manifold edges, vertices with more than two boundary edges, flipped faces) is reported
//! through [`mesh_error::MeshError`] as soon as it is met. No operation returns a partial ring or dual.
//!
//! ## Usage
//!
//! ```rust
//! use mesh_dual::prelude::*;
//! use mesh_dual::mesh_generation::icosahedron;
//!
//! let mesh = icosahedron().unwrap();
//! let ring = mesh.vert_ordered_one_ring(VertId::new(0)).unwrap();
//! assert_eq!(ring.faces.len(), 5);
//!
//! let dual = build_dual(&mesh, DualMeshOpts::default()).unwrap();
//! assert_eq!(dual.vertices.len(), 20);
//! assert_eq!(dual.faces.len(), 12);
//! ```
//!
//! ## Optional features
//! - `rayon`: compute `all_one_rings` in parallel.
//! - `strict-invariants` / `check-invariants`: keep adjacency invariant checks in release builds.

pub mod algs;
pub mod debug_invariants;
pub mod geometry;
pub mod mesh_error;
pub mod mesh_generation;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::boundary::{BoundaryClassification, classify_boundary};
    pub use crate::algs::dual_mesh::{DualMesh, DualMeshOpts, build_dual, build_dual_mesh};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::mesh_error::MeshError;
    pub use crate::topology::adjacency::{SurfaceAdjacency, SurfaceGeometry};
    pub use crate::topology::ids::{EdgeId, FaceId, VertId};
    pub use crate::topology::one_ring::{OneRing, all_one_rings};
    pub use crate::topology::queries::SurfaceQueries;
    pub use crate::topology::surface_mesh::SurfaceMesh;
    pub use crate::topology::validation::{
        NonManifoldHandling, SurfaceTopologyReport, SurfaceValidationOptions,
        validate_surface_topology,
    };
}
