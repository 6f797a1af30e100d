//! Whole-mesh topology validation.
//!
//! The one-ring walk checks manifoldness lazily, one vertex at a time. The
//! helpers here scan an entire mesh up front and report every boundary,
//! non-manifold and winding problem at once, so callers can reject bad
//! input before building anything on top of it.

use crate::mesh_error::MeshError;
use crate::topology::adjacency::SurfaceAdjacency;
use crate::topology::queries::SurfaceQueries;

/// Optional validation toggles for surface topology checks.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceValidationOptions {
    /// How to handle non-manifold edges/vertices.
    pub non_manifold: NonManifoldHandling,
    /// Fail on interior edges traversed in the same direction by both faces.
    pub check_winding: bool,
}

impl SurfaceValidationOptions {
    /// Enable all topology validation checks.
    pub fn all() -> Self {
        Self {
            non_manifold: NonManifoldHandling::Error,
            check_winding: true,
        }
    }
}

impl Default for SurfaceValidationOptions {
    fn default() -> Self {
        Self {
            non_manifold: NonManifoldHandling::Warn,
            check_winding: false,
        }
    }
}

/// Behavior for non-manifold detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonManifoldHandling {
    /// Skip non-manifold detection.
    Ignore,
    /// Log a warning on non-manifold entities.
    Warn,
    /// Return an error on non-manifold entities.
    Error,
}

/// Counts gathered while validating a surface mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceTopologyReport {
    pub boundary_edges: usize,
    pub non_manifold_edges: usize,
    /// Vertices whose boundary edges cannot form a single open fan.
    pub non_manifold_verts: usize,
    pub isolated_verts: usize,
    /// Interior edges whose two faces run them in the same direction.
    pub winding_conflicts: usize,
}

impl SurfaceTopologyReport {
    /// `true` for a mesh without boundary, non-manifold entities or winding conflicts.
    pub fn is_closed_manifold(&self) -> bool {
        self.boundary_edges == 0
            && self.non_manifold_edges == 0
            && self.non_manifold_verts == 0
            && self.winding_conflicts == 0
    }
}

/// Validate the surface topology of `mesh`.
pub fn validate_surface_topology<M>(
    mesh: &M,
    options: SurfaceValidationOptions,
) -> Result<SurfaceTopologyReport, MeshError>
where
    M: SurfaceAdjacency + ?Sized,
{
    let mut report = SurfaceTopologyReport::default();

    for e in mesh.edge_ids() {
        let incident_faces = mesh.adj_e2f(e).len();
        if mesh.edge_is_boundary(e) {
            report.boundary_edges += 1;
        }
        if !mesh.edge_is_manifold(e) {
            report.non_manifold_edges += 1;
            match options.non_manifold {
                NonManifoldHandling::Warn => {
                    log::warn!(
                        "Non-manifold edge detected: edge={e:?} incident_faces={incident_faces}"
                    );
                }
                NonManifoldHandling::Error => {
                    return Err(MeshError::NonManifoldEdge {
                        edge: e,
                        incident_faces,
                    });
                }
                NonManifoldHandling::Ignore => {}
            }
            continue;
        }
        if incident_faces == 2 {
            let [a, b] = mesh.edge_verts(e);
            let [f0, f1] = [mesh.adj_e2f(e)[0], mesh.adj_e2f(e)[1]];
            // consistently oriented neighbours run the shared edge in opposite directions
            if mesh.verts_are_ccw(f0, b, a) == mesh.verts_are_ccw(f1, b, a) {
                report.winding_conflicts += 1;
                if options.check_winding {
                    return Err(MeshError::InconsistentWinding { vertex: a, face: f1 });
                }
            }
        }
    }

    for v in mesh.vert_ids() {
        if mesh.adj_v2e(v).is_empty() {
            report.isolated_verts += 1;
            continue;
        }
        let boundary_edges = mesh.vert_boundary_edges(v).len();
        if boundary_edges != 0 && boundary_edges != 2 {
            report.non_manifold_verts += 1;
            match options.non_manifold {
                NonManifoldHandling::Warn => {
                    log::warn!(
                        "Non-manifold vertex detected: vertex={v:?} boundary_edges={}",
                        boundary_edges
                    );
                }
                NonManifoldHandling::Error => {
                    return Err(MeshError::NonManifoldVertex {
                        vertex: v,
                        boundary_edges,
                    });
                }
                NonManifoldHandling::Ignore => {}
            }
        }
    }

    log::debug!("surface topology report: {report:?}");
    Ok(report)
}
