use geodesic_lib::{
    build_icosphere,
    geodesic_polyhedron::{distance_for_subdivision, distance_for_subdivision_alt},
};

// Compares the spacing estimates against the measured edge angles of each subdivision level.
fn main() -> Result<(), geodesic_lib::IcosphereError> {
    for subdivs in 0..7 {
        let mesh = build_icosphere(subdivs)?;
        let angles = mesh.edge_angles();
        let mean = angles.iter().sum::<f64>() / angles.len() as f64;
        let min = angles.iter().copied().fold(f64::INFINITY, f64::min);

        println!(
            "{}: mean {:.6} (prediction {:.6}), min {:.6} (prediction {:.6})",
            subdivs,
            mean,
            distance_for_subdivision(subdivs),
            min,
            distance_for_subdivision_alt(subdivs),
        );
    }
    Ok(())
}
