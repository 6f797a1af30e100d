//! Re-export public algorithms.

pub mod boundary;
pub mod dual_mesh;

pub use boundary::{BoundaryClassification, classify_boundary};
pub use dual_mesh::{DualMesh, DualMeshOpts, build_dual, build_dual_mesh};
