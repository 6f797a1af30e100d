mod util;
use mesh_dual::mesh_generation::{icosahedron, triangle_grid};
use mesh_dual::prelude::*;
use util::*;

#[test]
fn closed_surface_has_no_boundary() {
    let mesh = icosahedron().unwrap();
    assert!(mesh.edge_ids().all(|x| !mesh.edge_is_boundary(x) && mesh.edge_is_manifold(x)));
    assert!(mesh.vert_ids().all(|x| !mesh.vert_is_boundary(x)));
    assert!(mesh.face_ids().all(|x| !mesh.face_is_boundary(x)));
    assert!(classify_boundary(&mesh).is_closed());
}

#[test]
fn opposite_vertex_is_the_other_endpoint() {
    let mesh = icosahedron().unwrap();
    for x in mesh.edge_ids() {
        let [a, b] = mesh.edge_verts(x);
        assert_eq!(mesh.vert_opposite_to(x, a).unwrap(), b);
        assert_eq!(mesh.vert_opposite_to(x, b).unwrap(), a);
    }
}

#[test]
fn neighbouring_faces_share_exactly_one_edge() {
    let mesh = icosahedron().unwrap();
    for x in mesh.face_ids() {
        assert_eq!(mesh.adj_f2f(x).len(), 3);
        for &y in mesh.adj_f2f(x) {
            let (a, b) = mesh.edge_shared(x, y).unwrap();
            let shared = mesh.edge_between(a, b).unwrap();
            assert!(mesh.adj_f2e(x).contains(&shared));
            assert!(mesh.adj_f2e(y).contains(&shared));
            assert_eq!(mesh.face_adjacent_along(x, a, b).unwrap(), Some(y));
            assert_eq!(mesh.face_adjacent_along(x, b, a).unwrap(), Some(y));
        }
    }
}

#[test]
fn faces_without_common_edge() {
    let mesh = triangle_grid(2, 1, 1.0).unwrap();
    // f0 = (0, 1, 4) and f3 = (1, 5, 4) share the edge (1, 4)
    assert!(mesh.edge_shared(f(0), f(3)).is_ok());
    // f0 and f2 = (1, 2, 5) touch at vertex 1 only
    assert_eq!(
        mesh.edge_shared(f(0), f(2)).unwrap_err(),
        MeshError::FacesDoNotShareEdge {
            a: f(0),
            b: f(2),
            shared: 1
        }
    );
}

#[test]
fn shared_face_of_two_edges() {
    let mesh = triangle_grid(1, 1, 1.0).unwrap();
    // f0 = (0, 1, 3), f1 = (0, 3, 2)
    let e01 = mesh.edge_between(v(0), v(1)).unwrap();
    let e13 = mesh.edge_between(v(1), v(3)).unwrap();
    let e03 = mesh.edge_between(v(0), v(3)).unwrap();
    let e23 = mesh.edge_between(v(2), v(3)).unwrap();
    assert_eq!(mesh.face_shared(e01, e13), Some(f(0)));
    assert_eq!(mesh.face_shared(e03, e23), Some(f(1)));
    assert!(mesh.edges_share_face(e03, e01));
    assert!(!mesh.edges_share_face(e01, e23));
}

#[test]
fn grid_boundary_edges() {
    let mesh = triangle_grid(3, 3, 1.0).unwrap();
    let b = classify_boundary(&mesh);
    assert_eq!(b.boundary_edges.len(), 12);
    assert_eq!(b.boundary_verts.len(), 12);
    assert_eq!(b.interior_verts, vec![v(5), v(6), v(9), v(10)]);
    assert_eq!(mesh.vert_boundary_edges(v(0)).len(), 2);
    assert!(mesh.vert_boundary_edges(v(5)).is_empty());
}

#[test]
fn ccw_test_follows_face_cycles() {
    let mesh = icosahedron().unwrap();
    for x in mesh.face_ids() {
        let verts = mesh.face_verts(x).to_vec();
        for i in 0..3 {
            let prev = verts[i];
            let curr = verts[(i + 1) % 3];
            assert!(mesh.verts_are_ccw(x, curr, prev));
            assert!(!mesh.verts_are_ccw(x, prev, curr));
        }
    }
}

#[test]
fn vertex_areas_partition_surface_area() {
    let mesh = triangle_grid(3, 2, 0.5).unwrap();
    let total: f64 = mesh.vert_ids().map(|x| mesh.vert_area(x)).sum();
    assert!((total - 1.5).abs() < 1e-12);
    let face_total: f64 = mesh.face_ids().map(|x| mesh.face_mass(x)).sum();
    assert!((face_total - 1.5).abs() < 1e-12);
    // corner (0, 0) touches two triangles of area 1/8
    assert!((mesh.vert_mass(v(0)) - 2.0 * 0.125 / 3.0).abs() < 1e-12);
}

#[test]
fn adjacency_across_edge_on_polygon_faces() {
    // f1 contains 0 and 1 as non-adjacent corners, so (0, 1) stays a boundary edge of f0
    let mesh = SurfaceMesh::new(
        vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
            [5.0, 5.0, 0.0],
            [2.0, 1.0, 0.0],
        ],
        vec![vec![0, 1, 2, 3], vec![2, 1, 5, 0]],
    )
    .unwrap();
    let e01 = mesh.edge_between(v(0), v(1)).unwrap();
    assert_eq!(mesh.adj_e2f(e01), &[f(0)]);
    assert_eq!(mesh.face_adjacent_along(f(0), v(0), v(1)).unwrap(), None);
    assert_eq!(mesh.face_adjacent_along(f(0), v(1), v(2)).unwrap(), Some(f(1)));
    assert_eq!(mesh.face_adjacent_along(f(1), v(2), v(1)).unwrap(), Some(f(0)));
}
