use std::collections::{HashMap, HashSet};

use nalgebra::Vector3;
use ndarray::Array2;

use crate::error::{IcosphereError, IcosphereResult};

// Three indices into the vertex list, in the winding of the base icosahedron
pub type Face = (usize, usize, usize);

// Smaller index first, so both faces sharing an edge produce the same key
pub type EdgeKey = (usize, usize);

pub fn edge_key(v1: usize, v2: usize) -> EdgeKey {
    if v1 <= v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

// A vertex's index is its position in `vertices`. Indices are stable once assigned, subdivision only
// appends vertices and replaces `faces` wholesale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vector3<f64>>,
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vector3<f64>>, faces: Vec<Face>) -> Mesh {
        Mesh { vertices, faces }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    // Every face must reference three distinct, existing vertices. Reports the first face that doesn't.
    pub fn validate(&self) -> IcosphereResult<()> {
        let len = self.vertices.len();
        for (face, &(a, b, c)) in self.faces.iter().enumerate() {
            for index in [a, b, c] {
                if index >= len {
                    return Err(IcosphereError::IndexOutOfRange { face, index, len });
                }
            }
            if a == b || a == c {
                return Err(IcosphereError::DegenerateEdge { vertex: a });
            }
            if b == c {
                return Err(IcosphereError::DegenerateEdge { vertex: b });
            }
        }
        Ok(())
    }

    fn face_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.faces
            .iter()
            .flat_map(|&(a, b, c)| [(a, b), (b, c), (c, a)])
    }

    pub fn edge_face_counts(&self) -> HashMap<EdgeKey, usize> {
        let mut counts = HashMap::with_capacity(self.faces.len() * 3 / 2);
        for (v1, v2) in self.face_edges() {
            *counts.entry(edge_key(v1, v2)).or_insert(0) += 1;
        }
        counts
    }

    // Unique edges in the order they are first met while walking the faces
    pub fn edges(&self) -> Vec<EdgeKey> {
        let mut seen = HashSet::with_capacity(self.faces.len() * 3 / 2);
        let mut out = Vec::with_capacity(self.faces.len() * 3 / 2);
        for (v1, v2) in self.face_edges() {
            let key = edge_key(v1, v2);
            if seen.insert(key) {
                out.push(key);
            }
        }
        out
    }

    // Every edge borders exactly two faces, and no directed edge appears twice (a flipped face).
    pub fn is_watertight(&self) -> bool {
        if self.faces.is_empty() {
            return false;
        }
        if !self.edge_face_counts().values().all(|&count| count == 2) {
            return false;
        }

        let mut directed = HashSet::with_capacity(self.faces.len() * 3);
        self.face_edges().all(|edge| directed.insert(edge))
    }

    // V - E + F, 2 for every icosphere
    pub fn euler_characteristic(&self) -> i64 {
        self.vertices.len() as i64 - self.edge_face_counts().len() as i64 + self.faces.len() as i64
    }

    // On the unit sphere the angle subtended at the origin is the great circle distance.
    pub fn edge_angles(&self) -> Vec<f64> {
        self.edges()
            .into_iter()
            .map(|(a, b)| self.vertices[a].angle(&self.vertices[b]))
            .collect()
    }

    pub fn is_unit(&self, epsilon: f64) -> bool {
        self.vertices
            .iter()
            .all(|v| approx::abs_diff_eq!(v.norm(), 1., epsilon = epsilon))
    }

    pub fn to_arrays(&self) -> (Array2<f64>, Array2<usize>) {
        let verts = Array2::from_shape_fn((self.vertices.len(), 3), |(i, j)| self.vertices[i][j]);
        let faces = Array2::from_shape_fn((self.faces.len(), 3), |(i, j)| {
            let (a, b, c) = self.faces[i];
            [a, b, c][j]
        });
        (verts, faces)
    }
}
