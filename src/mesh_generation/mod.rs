//! Basic mesh generators for closed solids and planar sheets.
//!
//! Every generator emits faces with a consistent CCW winding (outward
//! facing for closed solids, `+z` facing for planar sheets).

use crate::mesh_error::MeshError;
use crate::topology::surface_mesh::SurfaceMesh;

fn invalid_geometry(message: impl Into<String>) -> MeshError {
    MeshError::InvalidGeometry(message.into())
}

/// One triangle in the `z = 0` plane; all three edges are boundary edges.
pub fn single_triangle() -> Result<SurfaceMesh, MeshError> {
    SurfaceMesh::new(
        vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        vec![vec![0, 1, 2]],
    )
}

/// Regular tetrahedron: 4 vertices, 6 edges, 4 triangles.
pub fn tetrahedron() -> Result<SurfaceMesh, MeshError> {
    SurfaceMesh::new(
        vec![
            [1.0, 1.0, 1.0],
            [1.0, -1.0, -1.0],
            [-1.0, 1.0, -1.0],
            [-1.0, -1.0, 1.0],
        ],
        vec![vec![0, 2, 3], vec![0, 3, 1], vec![0, 1, 2], vec![1, 3, 2]],
    )
}

/// Icosahedron: 12 vertices, 30 edges, 20 triangles; every vertex has degree 5.
pub fn icosahedron() -> Result<SurfaceMesh, MeshError> {
    let t = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let positions = vec![
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ];
    let triangles: [[usize; 3]; 20] = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    SurfaceMesh::new(positions, triangles.iter().map(|t| t.to_vec()).collect())
}

/// Planar grid of `nx * ny` unit cells in the `z = 0` plane, each split
/// into two triangles along its `(i, j) - (i + 1, j + 1)` diagonal.
///
/// Vertex `(i, j)` has index `j * (nx + 1) + i` and position
/// `(i * spacing, j * spacing, 0)`.
pub fn triangle_grid(nx: usize, ny: usize, spacing: f64) -> Result<SurfaceMesh, MeshError> {
    if nx == 0 || ny == 0 {
        return Err(invalid_geometry(format!(
            "grid needs at least one cell per direction, got {nx}x{ny}"
        )));
    }
    if !(spacing.is_finite() && spacing > 0.0) {
        return Err(invalid_geometry(format!(
            "grid spacing must be positive and finite, got {spacing}"
        )));
    }

    let row = nx + 1;
    let mut positions = Vec::with_capacity(row * (ny + 1));
    for j in 0..=ny {
        for i in 0..=nx {
            positions.push([i as f64 * spacing, j as f64 * spacing, 0.0]);
        }
    }

    let mut polygons = Vec::with_capacity(2 * nx * ny);
    for j in 0..ny {
        for i in 0..nx {
            let a = j * row + i;
            let b = a + 1;
            let c = b + row;
            let d = a + row;
            polygons.push(vec![a, b, c]);
            polygons.push(vec![a, c, d]);
        }
    }

    SurfaceMesh::new(positions, polygons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::adjacency::SurfaceAdjacency;
    use crate::topology::validation::{SurfaceValidationOptions, validate_surface_topology};

    #[test]
    fn closed_solids_are_closed_manifolds() {
        for mesh in [tetrahedron().unwrap(), icosahedron().unwrap()] {
            let report = validate_surface_topology(&mesh, SurfaceValidationOptions::all()).unwrap();
            assert!(report.is_closed_manifold());
        }
    }

    #[test]
    fn icosahedron_counts() {
        let m = icosahedron().unwrap();
        assert_eq!((m.num_verts(), m.num_edges(), m.num_faces()), (12, 30, 20));
    }

    #[test]
    fn grid_counts() {
        let m = triangle_grid(3, 2, 0.5).unwrap();
        assert_eq!(m.num_verts(), 12);
        assert_eq!(m.num_faces(), 12);
        // 3*3 horizontal + 4*2 vertical + 6 diagonals
        assert_eq!(m.num_edges(), 23);
        let report = validate_surface_topology(&m, SurfaceValidationOptions::all()).unwrap();
        assert_eq!(report.boundary_edges, 10);
        assert_eq!(m.positions()[11], [1.5, 1.0, 0.0]);
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert!(matches!(
            triangle_grid(0, 4, 1.0),
            Err(MeshError::InvalidGeometry(_))
        ));
        assert!(matches!(
            triangle_grid(1, 1, -1.0),
            Err(MeshError::InvalidGeometry(_))
        ));
    }
}
