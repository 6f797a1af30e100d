//! Top-level module for surface mesh topology.
//!
//! This module provides the core types and traits for querying polygonal surface meshes.
//! It includes:
//! - Strong index handles for vertices, edges and faces
//! - The `SurfaceAdjacency` / `SurfaceGeometry` capability traits and the in-memory `SurfaceMesh`
//! - Local topology queries and the winding-ordered one-ring traversal
//! - Whole-mesh manifold and winding validation
//!
//! Most users will build a `SurfaceMesh` and call the `SurfaceQueries` extension methods on it.

pub mod adjacency;
pub mod ids;
pub mod one_ring;
pub mod queries;
pub mod surface_mesh;
pub mod validation;

pub use adjacency::{SurfaceAdjacency, SurfaceGeometry};
pub use ids::{EdgeId, FaceId, VertId};
pub use one_ring::OneRing;
pub use queries::SurfaceQueries;
pub use surface_mesh::SurfaceMesh;
