/// Shows an icosphere with its vertices coloured by the round that created them.
use geodesic_lib::{build_icosphere, spherical_vis};

fn main() -> Result<(), geodesic_lib::IcosphereError> {
    let mesh = build_icosphere(4)?;
    spherical_vis::run(&mesh);
    Ok(())
}
