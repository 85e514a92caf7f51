use std::{
    error::Error,
    io::{self, BufWriter, Write},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use geodesic_lib::{
    build_icosphere,
    geodesic_polyhedron::{
        distance_for_subdivision, subdivisions_for_distance, subdivisions_from_signed,
    },
    helper::vec_to_aspect,
    Mesh,
};
use tracing::info;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Vertex and face matrices
    Array,
    /// One `x y z` line per vertex
    Cartesian,
    /// One `azimuth elevation` line per vertex, in radians
    Aspect,
}

#[derive(Parser, Debug)]
#[command(
    name = "icosphere",
    version,
    about = "Generate a geodesic sphere by repeatedly subdividing an icosahedron"
)]
struct Cli {
    /// Number of subdivision rounds applied to the icosahedron
    #[arg(
        short = 'n',
        long,
        default_value_t = 3,
        allow_negative_numbers = true,
        conflicts_with = "resolution"
    )]
    subdivisions: i64,

    /// Pick the level whose mean vertex spacing is closest to this angle, in radians
    #[arg(short, long, value_name = "RADIANS", value_parser = parse_resolution)]
    resolution: Option<f64>,

    #[arg(short, long, value_enum, default_value_t = Format::Array)]
    format: Format,

    /// Print a summary of the mesh instead of its contents
    #[arg(long)]
    stats: bool,
}

fn parse_resolution(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() && value > 0. {
        Ok(value)
    } else {
        Err(format!("resolution must be a positive angle, got {value}"))
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn write_stats(out: &mut impl Write, subdivs: usize, mesh: &Mesh) -> io::Result<()> {
    let angles = mesh.edge_angles();
    let mean = angles.iter().sum::<f64>() / angles.len() as f64;
    let min = angles.iter().copied().fold(f64::INFINITY, f64::min);
    let max = angles.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    writeln!(out, "Subdivisions: {subdivs}")?;
    writeln!(out, "Vertices: {}", mesh.vertex_count())?;
    writeln!(out, "Edges: {}", angles.len())?;
    writeln!(out, "Faces: {}", mesh.face_count())?;
    writeln!(out, "Euler characteristic: {}", mesh.euler_characteristic())?;
    writeln!(out, "Watertight: {}", mesh.is_watertight())?;
    writeln!(out, "Edge angle: mean {mean:.6}, min {min:.6}, max {max:.6}")?;
    writeln!(
        out,
        "Predicted mean edge angle: {:.6}",
        distance_for_subdivision(subdivs)
    )
}

fn write_mesh(out: &mut impl Write, mesh: &Mesh, format: Format) -> io::Result<()> {
    match format {
        Format::Array => {
            // Alternate form prints every row instead of eliding the middle
            let (verts, faces) = mesh.to_arrays();
            writeln!(out, "Vertices:\n{verts:#}")?;
            writeln!(out, "\nFaces:\n{faces:#}")
        }
        Format::Cartesian | Format::Aspect => {
            writeln!(out, "Vertices:")?;
            for v in mesh.vertices.iter() {
                if format == Format::Aspect {
                    let (az, el) = vec_to_aspect(*v);
                    writeln!(out, "{az} {el}")?;
                } else {
                    writeln!(out, "{} {} {}", v.x, v.y, v.z)?;
                }
            }
            writeln!(out, "\nFaces:")?;
            for (a, b, c) in mesh.faces.iter() {
                writeln!(out, "{a} {b} {c}")?;
            }
            Ok(())
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let subdivs = match cli.resolution {
        Some(resolution) => subdivisions_for_distance(resolution)
            .ok_or_else(|| format!("no subdivision level matches resolution {resolution}"))?,
        None => subdivisions_from_signed(cli.subdivisions)?,
    };
    info!("Building icosphere with {} subdivisions", subdivs);

    let mesh = build_icosphere(subdivs)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.stats {
        write_stats(&mut out, subdivs, &mesh)?;
    } else {
        write_mesh(&mut out, &mesh, cli.format)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
