use tracing::debug;

use crate::{
    error::{IcosphereError, IcosphereResult},
    icosahedron::icosahedron,
    mesh::Mesh,
    projection::project_to_unit_sphere,
    subdivision::subdivide,
};

// Central angle between two adjacent icosahedron vertices. Two neighbours such as (-1, φ, 0) and
// (1, φ, 0) are 2 apart and both lie at distance sqrt(φ+2) from the origin (using φ^2 = φ+1), so the
// law of cosines gives
// acos(1-2/(φ+2))
const POLY_ANGLE: f64 = 1.10714871779409040897235172451473772525787353515625;

/*
Generates an icosphere, created by repeatedly splitting each face of an icosahedron into four
and pushing the new vertices out onto the unit sphere. Subdivision 0 is the icosahedron itself,
subdivision 1 yields
```
 /\
/\/\
```
on each original face, subdivision 2 splits each of those four again, and so on.
Every round appends 3F/2 vertices (one per edge) and multiplies the face count by four, so level n has
10*4^n+2 vertices and 20*4^n faces. Vertices created in earlier rounds keep their indices.

Returns the mesh with all vertices on the unit sphere and faces wound counterclockwise when viewed from
outside. The output depends only on `subdivs`. Levels whose mesh does not fit in memory fail with
TooManySubdivisions rather than aborting.
*/
pub fn build_icosphere(subdivs: usize) -> IcosphereResult<Mesh> {
    let too_many = IcosphereError::TooManySubdivisions { requested: subdivs };
    let (verts, faces) = expected_counts(subdivs).ok_or_else(|| too_many.clone())?;

    let mut mesh = icosahedron();
    // Vertices only ever grow, so the whole buffer is claimed before any work is done
    mesh.vertices
        .try_reserve_exact(verts - mesh.vertex_count())
        .map_err(|_| too_many.clone())?;

    for round in 1..=subdivs {
        // Midpoints are taken along the chord, projecting afterwards moves them onto the great circle.
        subdivide(&mut mesh).map_err(|err| match err {
            IcosphereError::MeshTooLarge { .. } => too_many.clone(),
            err => err,
        })?;
        project_to_unit_sphere(&mut mesh)?;
        debug!(
            "Round {}: {} faces, {} vertices",
            round,
            mesh.face_count(),
            mesh.vertex_count()
        );
    }

    debug_assert_eq!(mesh.vertex_count(), verts);
    debug_assert_eq!(mesh.face_count(), faces);
    Ok(mesh)
}

// Converts a signed subdivision count from an external caller.
pub fn subdivisions_from_signed(n: i64) -> IcosphereResult<usize> {
    usize::try_from(n).map_err(|_| IcosphereError::InvalidArgument { requested: n })
}

// The vertex and face counts of subdivision level `subdivs`, or None if they overflow.
pub fn expected_counts(subdivs: usize) -> Option<(usize, usize)> {
    let scale = 4usize.checked_pow(u32::try_from(subdivs).ok()?)?;
    let verts = scale.checked_mul(10)?.checked_add(2)?;
    let faces = scale.checked_mul(20)?;
    Some((verts, faces))
}

// The round in which vertex `index` was created. The 12 icosahedron vertices are round 0.
pub fn vertex_generation(index: usize) -> usize {
    let mut generation = 0;
    while let Some((verts, _)) = expected_counts(generation) {
        if index < verts {
            break;
        }
        generation += 1;
    }
    generation
}

// After n rounds every original edge is split into 2^n segments.
fn frequency(subdivs: usize) -> f64 {
    2f64.powi(subdivs as i32)
}

// Gives an estimate for the mean spherical distance between neighbouring vertices at a given subdivision level.
// Recall that a great circle distance is equal to the angle subtended by the endpoints
// multiplied by radius. We assume the sphere has radius 1, so that the distance equals the angle.
// The estimate runs about 5% above the measured mean at every level.
pub fn distance_for_subdivision(subdivs: usize) -> f64 {
    // Cover the sphere (of radius 1) with circles of radius r/2 centered at each of the points of the polyhedron. These circles should
    // approximately cover the surface of the sphere, giving us the following relation, with n the frequency:
    // 4π=(10n^2+2)(πr^2/4)
    // Solving for r gives us
    // 16/(10n^2+2)=r^2

    let n = frequency(subdivs);
    (16. / (10. * n * n + 2.)).sqrt()
}

// Reverses the operation of `distance_for_subdivision`, rounding to the nearest level.
// None for distances that are not positive and finite.
pub fn subdivisions_for_distance(dist: f64) -> Option<usize> {
    if !(dist.is_finite() && dist > 0.) {
        return None;
    }
    // 16/(10r^2)=n^2+1/5, and n = 2^subdivs
    let n = (16. / (10. * dist * dist) - 1. / 5.).max(1.).sqrt();
    Some(n.log2().round() as usize)
}

// The spacing of vertices along the original edges of the icosahedron. Halving a great circle arc with a
// chord midpoint and projecting is exact, so these are precisely POLY_ANGLE / 2^n. They are also the
// shortest edges in the mesh.
pub fn distance_for_subdivision_alt(subdivs: usize) -> f64 {
    POLY_ANGLE / frequency(subdivs)
}
