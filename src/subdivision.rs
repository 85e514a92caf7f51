use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    error::{IcosphereError, IcosphereResult},
    helper::midpoint,
    mesh::{edge_key, EdgeKey, Face, Mesh},
};

// Maps each edge split during one subdivision round to the index of its midpoint vertex.
// Entries name vertex indices of the mesh being subdivided, so a cache is only good for one round.
#[derive(Debug, Default)]
pub struct EdgeMidpointCache {
    midpoints: HashMap<EdgeKey, usize>,
}

impl EdgeMidpointCache {
    pub fn new() -> EdgeMidpointCache {
        EdgeMidpointCache::default()
    }

    pub fn with_capacity(edges: usize) -> EdgeMidpointCache {
        EdgeMidpointCache {
            midpoints: HashMap::with_capacity(edges),
        }
    }

    pub fn len(&self) -> usize {
        self.midpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.midpoints.is_empty()
    }

    pub fn get(&self, v1: usize, v2: usize) -> Option<usize> {
        self.midpoints.get(&edge_key(v1, v2)).copied()
    }

    // Returns the midpoint vertex of edge (v1, v2), appending it to `mesh` the first time the edge is
    // seen, in either direction. The new vertex is the chord midpoint and is not projected.
    // Degenerate or out of range edges are rejected before the mesh is touched.
    pub fn get_or_create_midpoint(
        &mut self,
        mesh: &mut Mesh,
        v1: usize,
        v2: usize,
    ) -> IcosphereResult<usize> {
        if v1 == v2 {
            return Err(IcosphereError::DegenerateEdge { vertex: v1 });
        }

        let key = edge_key(v1, v2);
        if let Some(&index) = self.midpoints.get(&key) {
            return Ok(index);
        }

        let len = mesh.vertices.len();
        if key.1 >= len {
            return Err(IcosphereError::VertexOutOfRange { index: key.1, len });
        }

        let new_index = len;
        let mid = midpoint(&mesh.vertices[key.0], &mesh.vertices[key.1]);
        mesh.vertices.push(mid);
        self.midpoints.insert(key, new_index);
        Ok(new_index)
    }
}

/*
Splits every face into four by connecting the midpoints of its edges:
```
      v1                 v1
     /  \               /  \
    /    \             a----c
   /      \    =>     / \  / \
  /        \         /   \/   \
v2----------v3     v2----b----v3
```
The three corner triangles keep one original vertex each, the centre triangle is made of
midpoints only. All four keep the winding of their parent.

Existing vertices keep their indices, and the midpoints are appended in the order their edges are
first met while walking the faces. A closed mesh with F faces gains 3F/2 vertices and ends up
with 4F faces.

The face list is validated and every buffer the round needs is reserved up front, so on error
`mesh` is left as it was. A round too large to allocate fails with MeshTooLarge.
*/
pub fn subdivide(mesh: &mut Mesh) -> IcosphereResult<()> {
    mesh.validate()?;

    let old_count = mesh.faces.len();
    let too_large = || IcosphereError::MeshTooLarge { faces: old_count };
    let edges = old_count.checked_mul(3).ok_or_else(too_large)? / 2;
    let face_count = old_count.checked_mul(4).ok_or_else(too_large)?;

    let mut new_faces: Vec<Face> = Vec::new();
    new_faces
        .try_reserve_exact(face_count)
        .map_err(|_| too_large())?;
    mesh.vertices.try_reserve(edges).map_err(|_| too_large())?;
    let mut cache = EdgeMidpointCache::new();
    cache
        .midpoints
        .try_reserve(edges)
        .map_err(|_| too_large())?;

    let old_faces = std::mem::take(&mut mesh.faces);
    let old_vertices = mesh.vertices.len();

    for &(v1, v2, v3) in old_faces.iter() {
        let a = cache.get_or_create_midpoint(mesh, v1, v2)?;
        let b = cache.get_or_create_midpoint(mesh, v2, v3)?;
        let c = cache.get_or_create_midpoint(mesh, v3, v1)?;

        new_faces.push((v1, a, c));
        new_faces.push((v2, b, a));
        new_faces.push((v3, c, b));
        new_faces.push((a, b, c));
    }

    trace!("Created {} edge midpoints", cache.len());
    debug!(
        "Subdivided {} faces, {} vertices into {} faces, {} vertices",
        old_faces.len(),
        old_vertices,
        new_faces.len(),
        mesh.vertices.len()
    );

    mesh.faces = new_faces;
    Ok(())
}
