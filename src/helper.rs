use nalgebra::Vector3;

// Scales a vector to unit length. Returns None for the zero vector, which has no direction.
pub fn normalize(vec: Vector3<f64>) -> Option<Vector3<f64>> {
    vec.try_normalize(0.)
}

// Straight-chord midpoint of two points. For points on the sphere this lies strictly inside it
// unless the points coincide.
pub fn midpoint(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    (a + b) / 2.
}

pub fn distance(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    (a - b).norm()
}

// Given a vector in a local frame, compute the azimuth and elevation.
// x is taken as forward, y as right, z as down. Positive azimuth goes from x to y, positive elevation goes from x to -z.
pub fn vec_to_aspect(vec: Vector3<f64>) -> (f64, f64) {
    let az = f64::atan2(vec[1], vec[0]);
    let el = f64::asin(vec[2] / vec.magnitude());
    (az, el)
}

// Callers must rule out zero vectors first, they come out as NaN.
pub fn normalize_all(mut slice: impl AsMut<[Vector3<f64>]>) {
    for x in slice.as_mut().iter_mut() {
        x.normalize_mut();
    }
}
