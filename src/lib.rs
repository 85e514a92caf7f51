// Constant tables follow the notation of the geometry, e.g. φ
#![allow(non_upper_case_globals)]
pub mod error;
pub mod geodesic_polyhedron;
pub mod helper;
pub mod icosahedron;
pub mod mesh;
pub mod projection;
#[cfg(feature = "viewer")]
pub mod spherical_vis;
pub mod subdivision;

pub use error::{IcosphereError, IcosphereResult};
pub use geodesic_polyhedron::build_icosphere;
pub use mesh::{Face, Mesh};
