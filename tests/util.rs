#![allow(dead_code)]
use mesh_dual::prelude::*;

pub fn v(i: usize) -> VertId {
    VertId::new(i)
}

pub fn e(i: usize) -> EdgeId {
    EdgeId::new(i)
}

pub fn f(i: usize) -> FaceId {
    FaceId::new(i)
}

/// Build a mesh from positions and triangles, panicking on bad input.
pub fn tri_mesh(positions: &[[f64; 3]], triangles: &[[usize; 3]]) -> SurfaceMesh {
    SurfaceMesh::new(
        positions.to_vec(),
        triangles.iter().map(|t| t.to_vec()).collect(),
    )
    .unwrap()
}

/// Two tetrahedra glued at vertex 0 only.
pub fn bowtie() -> SurfaceMesh {
    tri_mesh(
        &[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 1.0],
            [1.0, 1.0, 0.0],
            [1.0, -1.0, -1.0],
            [-1.0, 0.0, 1.0],
            [-1.0, 1.0, 0.0],
            [-1.0, -1.0, -1.0],
        ],
        &[
            [0, 2, 3],
            [0, 3, 1],
            [0, 1, 2],
            [1, 3, 2],
            [0, 5, 6],
            [0, 6, 4],
            [0, 4, 5],
            [4, 6, 5],
        ],
    )
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}

/// Signed area of a polygon projected onto the xy plane (shoelace).
pub fn signed_area_xy(points: &[[f64; 3]]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let p = points[i];
            let q = points[(i + 1) % n];
            p[0] * q[1] - q[0] * p[1]
        })
        .sum::<f64>()
        / 2.0
}

/// Check every structural property an ordered triangle one-ring must have.
pub fn assert_ring_is_ordered(mesh: &SurfaceMesh, ring: &OneRing) {
    let c = ring.center;
    let nf = ring.faces.len();
    assert_permutation(&ring.faces, mesh.adj_v2f(c));
    assert_permutation(&ring.edges, mesh.adj_v2e(c));
    assert_eq!(ring.link.len(), nf);

    if mesh.vert_is_boundary(c) {
        assert_eq!(ring.verts.len(), nf + 1, "boundary ring of {c:?}");
        assert_eq!(ring.edges.len(), nf + 1, "boundary ring of {c:?}");
        assert!(mesh.edge_is_boundary(ring.edges[0]));
        assert!(mesh.edge_is_boundary(ring.edges[nf]));
    } else {
        assert_eq!(ring.verts.len(), nf, "interior ring of {c:?}");
        assert_eq!(ring.edges.len(), nf, "interior ring of {c:?}");
    }

    let nv = ring.verts.len();
    for (i, &edge) in ring.edges.iter().enumerate() {
        assert!(mesh.edge_contains_vert(edge, c));
        assert!(mesh.edge_contains_vert(edge, ring.verts[i]));
    }
    for (i, &face) in ring.faces.iter().enumerate() {
        let a = ring.verts[i];
        let b = ring.verts[(i + 1) % nv];
        // (center, a, b) is the cycle of the face
        assert!(mesh.verts_are_ccw(face, a, c), "{face:?} does not run {c:?} -> {a:?}");
        assert!(mesh.verts_are_ccw(face, b, a), "{face:?} does not run {a:?} -> {b:?}");
        assert!(mesh.edge_contains_vert(ring.link[i], a));
        assert!(mesh.edge_contains_vert(ring.link[i], b));
    }
    // consecutive faces share the edge between them
    for i in 0..nf.saturating_sub(1) {
        let shared = mesh.adj_e2f(ring.edges[i + 1]);
        assert!(shared.contains(&ring.faces[i]) && shared.contains(&ring.faces[i + 1]));
    }
    // an interior ring closes: the last face meets the first across edges[0]
    if !mesh.vert_is_boundary(c) && nf > 0 {
        let shared = mesh.adj_e2f(ring.edges[0]);
        assert!(shared.contains(&ring.faces[nf - 1]) && shared.contains(&ring.faces[0]));
    }
}
