use crate::{
    error::{IcosphereError, IcosphereResult},
    helper::normalize_all,
    mesh::Mesh,
};

// Pushes every vertex radially onto the unit sphere. Faces are untouched. Vertices already on the
// sphere only move by rounding, so the projection can be reapplied to the whole mesh every round.
//
// A vertex at the origin has no direction to project along. Every vertex is checked before any is
// moved, so on error the mesh is left as it was.
pub fn project_to_unit_sphere(mesh: &mut Mesh) -> IcosphereResult<()> {
    if let Some(index) = mesh.vertices.iter().position(|v| v.norm_squared() == 0.) {
        return Err(IcosphereError::DegenerateVertex { index });
    }

    normalize_all(&mut mesh.vertices);
    Ok(())
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::{icosahedron::icosahedron, subdivision::subdivide};

    #[test]
    fn projects_onto_sphere() {
        let mut mesh = Mesh::new(
            vec![
                Vector3::new(0., 0., 3.),
                Vector3::new(1., 1., 0.),
                Vector3::new(-0.1, 0.2, -0.3),
            ],
            vec![(0, 1, 2)],
        );
        project_to_unit_sphere(&mut mesh).unwrap();

        assert!(mesh.is_unit(1e-12));
        assert_relative_eq!(mesh.vertices[0], Vector3::z());
        assert_relative_eq!(
            mesh.vertices[1],
            Vector3::new(1., 1., 0.) / 2f64.sqrt(),
            epsilon = 1e-15
        );
        assert_eq!(mesh.faces, vec![(0, 1, 2)]);
    }

    #[test]
    fn projection_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(0x1c05);
        let verts = (0..500)
            .map(|_| {
                Vector3::new(
                    rng.gen_range(-10.0..10.0),
                    rng.gen_range(-10.0..10.0),
                    rng.gen_range(-10.0..10.0),
                )
            })
            .collect();
        let mut mesh = Mesh::new(verts, Vec::new());

        project_to_unit_sphere(&mut mesh).unwrap();
        let once = mesh.clone();
        project_to_unit_sphere(&mut mesh).unwrap();

        for (a, b) in once.vertices.iter().zip(mesh.vertices.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-15);
        }
    }

    #[test]
    fn subdivided_midpoints_reach_sphere() {
        let mut mesh = icosahedron();
        subdivide(&mut mesh).unwrap();
        assert!(!mesh.is_unit(1e-9));
        project_to_unit_sphere(&mut mesh).unwrap();
        assert!(mesh.is_unit(1e-12));
    }

    #[test]
    fn zero_vertex_is_rejected() {
        let mut mesh = Mesh::new(
            vec![Vector3::new(2., 0., 0.), Vector3::zeros()],
            Vec::new(),
        );
        let before = mesh.clone();
        assert_eq!(
            project_to_unit_sphere(&mut mesh),
            Err(IcosphereError::DegenerateVertex { index: 1 })
        );
        assert_eq!(mesh, before);
    }
}
