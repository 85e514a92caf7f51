//! End to end checks of the icosphere construction through the public API.

use approx::assert_abs_diff_eq;
use geodesic_lib::{
    build_icosphere,
    geodesic_polyhedron::{expected_counts, subdivisions_from_signed},
    icosahedron::icosahedron,
    projection::project_to_unit_sphere,
    subdivision::subdivide,
    IcosphereError,
};

#[test]
fn counts_for_first_levels() {
    let expected = [(12, 20), (42, 80), (162, 320), (642, 1280)];
    for (n, &(verts, faces)) in expected.iter().enumerate() {
        let mesh = build_icosphere(n).unwrap();
        assert_eq!((mesh.vertex_count(), mesh.face_count()), (verts, faces));
        assert_eq!(verts, 12 + 10 * (4usize.pow(n as u32) - 1));
    }
}

#[test]
fn vertices_are_on_unit_sphere() {
    let mesh = build_icosphere(4).unwrap();
    for v in &mesh.vertices {
        assert_abs_diff_eq!(v.norm(), 1., epsilon = 1e-9);
    }
}

#[test]
fn faces_are_valid_and_closed() {
    for n in 0..5 {
        let mesh = build_icosphere(n).unwrap();
        assert_eq!(mesh.validate(), Ok(()));
        assert!(mesh.is_watertight());
        assert_eq!(mesh.euler_characteristic(), 2);
        assert!(mesh.edge_face_counts().values().all(|&c| c == 2));
    }
}

#[test]
fn faces_keep_outward_winding() {
    let mesh = build_icosphere(3).unwrap();
    for &(a, b, c) in &mesh.faces {
        let (va, vb, vc) = (mesh.vertices[a], mesh.vertices[b], mesh.vertices[c]);
        let normal = (vb - va).cross(&(vc - va));
        assert!(normal.dot(&(va + vb + vc)) > 0.);
    }
}

#[test]
fn build_is_deterministic() {
    let first = build_icosphere(3).unwrap();
    let second = build_icosphere(3).unwrap();
    assert_eq!(first.faces, second.faces);
    for (a, b) in first.vertices.iter().zip(second.vertices.iter()) {
        for i in 0..3 {
            assert_eq!(a[i].to_bits(), b[i].to_bits());
        }
    }
}

#[test]
fn levels_extend_previous_levels() {
    // Earlier vertices keep their index, and their position up to reprojection rounding
    let coarse = build_icosphere(2).unwrap();
    let fine = build_icosphere(3).unwrap();
    for (a, b) in coarse.vertices.iter().zip(fine.vertices.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-15);
    }
}

#[test]
fn driver_matches_manual_rounds() {
    let mut mesh = icosahedron();
    for _ in 0..2 {
        subdivide(&mut mesh).unwrap();
        project_to_unit_sphere(&mut mesh).unwrap();
    }
    assert_eq!(mesh, build_icosphere(2).unwrap());
}

#[test]
fn reprojection_changes_nothing() {
    let mesh = build_icosphere(3).unwrap();
    let mut again = mesh.clone();
    project_to_unit_sphere(&mut again).unwrap();
    for (a, b) in mesh.vertices.iter().zip(again.vertices.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-15);
    }
}

#[test]
fn round_adds_one_vertex_per_edge() {
    let mut mesh = build_icosphere(2).unwrap();
    let edges = mesh.edges().len();
    let (verts, faces) = (mesh.vertex_count(), mesh.face_count());
    subdivide(&mut mesh).unwrap();
    assert_eq!(edges, 3 * faces / 2);
    assert_eq!(mesh.vertex_count(), verts + edges);
    assert_eq!(mesh.face_count(), 4 * faces);
    assert_eq!(expected_counts(3), Some((mesh.vertex_count(), mesh.face_count())));
}

#[test]
fn negative_count_is_rejected() {
    assert_eq!(
        subdivisions_from_signed(-5).and_then(build_icosphere),
        Err(IcosphereError::InvalidArgument { requested: -5 })
    );
}
