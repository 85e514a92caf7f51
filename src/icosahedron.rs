use nalgebra::Vector3;

use crate::mesh::{Face, Mesh};

// (1+sqrt(5))/2
pub const GOLDEN_RATIO: f64 = 1.6180339887498948482045868343656381177;

// Constant data for the base mesh, an icosahedron or D20. The vertices are the corners of three
// mutually perpendicular 2 by 2φ rectangles, one in each coordinate plane. They all share the
// length sqrt(1+φ^2), and are scaled down onto the unit sphere by `icosahedron`.
const φ: f64 = GOLDEN_RATIO;
const initial_verts: [Vector3<f64>; 12] = [
    Vector3::new(-1., φ, 0.),
    Vector3::new(1., φ, 0.),
    Vector3::new(-1., -φ, 0.),
    Vector3::new(1., -φ, 0.),
    Vector3::new(0., -1., φ),
    Vector3::new(0., 1., φ),
    Vector3::new(0., -1., -φ),
    Vector3::new(0., 1., -φ),
    Vector3::new(φ, 0., -1.),
    Vector3::new(φ, 0., 1.),
    Vector3::new(-φ, 0., -1.),
    Vector3::new(-φ, 0., 1.),
];
// Triangles oriented in widdershins(counterclockwise) order when viewed from outside
const initial_tris: [Face; 20] = [
    // The five faces around vertex 0
    (0, 11, 5),
    (0, 5, 1),
    (0, 1, 7),
    (0, 7, 10),
    (0, 10, 11),
    // Adjacent faces
    (1, 5, 9),
    (5, 11, 4),
    (11, 10, 2),
    (10, 7, 6),
    (7, 1, 8),
    // The five faces around vertex 3
    (3, 9, 4),
    (3, 4, 2),
    (3, 2, 6),
    (3, 6, 8),
    (3, 8, 9),
    // Adjacent faces
    (4, 9, 5),
    (2, 4, 11),
    (6, 2, 10),
    (8, 6, 7),
    (9, 8, 1),
];

/// The regular icosahedron inscribed in the unit sphere: 12 vertices, 20 faces, 30 edges.
///
/// Output is fixed, so two calls always agree bit for bit.
pub fn icosahedron() -> Mesh {
    let mut vertices: Vec<_> = initial_verts.to_vec();
    for v in vertices.iter_mut() {
        v.normalize_mut();
    }

    Mesh::new(vertices, initial_tris.to_vec())
}
