use clap::{Parser, ValueEnum};
use revolve_core::{DEFAULT_RADIAL_SEGMENTS, DEFAULT_TEXTURE_HEIGHT};
use revolve_prep::{PrepConfig, PrepMode};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "revolve-prep")]
#[command(
    about = "Generate a solid-of-revolution proxy mesh (PLY) from a silhouette contour",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Input contour file, one radius in [0,1] per line (*.lst)
    #[arg(short, long)]
    contour: PathBuf,

    /// Texture file (*.png): written in arc-length mode, referenced in uniform mode
    #[arg(short, long)]
    texture: PathBuf,

    /// Output path for the generated proxy geometry (*.ply)
    #[arg(short, long)]
    output_mesh: PathBuf,

    /// Number of radial segments of the generated mesh
    #[arg(long, default_value_t = DEFAULT_RADIAL_SEGMENTS)]
    radial_segments: u32,

    /// Vertical resolution of the generated texture atlas
    #[arg(long, default_value_t = DEFAULT_TEXTURE_HEIGHT)]
    texture_height: u32,

    /// UV parameterization
    #[arg(long, value_enum, default_value_t = UvModeArg::ArcLength)]
    uv_mode: UvModeArg,

    /// Suppress progress output (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum UvModeArg {
    /// V = height fraction; uses an existing texture
    Uniform,
    /// V = arc length; generates the texture atlas
    ArcLength,
}

impl From<UvModeArg> for PrepMode {
    fn from(arg: UvModeArg) -> Self {
        match arg {
            UvModeArg::Uniform => PrepMode::Uniform,
            UvModeArg::ArcLength => PrepMode::ArcLength,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging (suppressed if --quiet)
    if !cli.quiet {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let config = PrepConfig {
        contour_path: cli.contour,
        texture_path: cli.texture,
        output_mesh: cli.output_mesh,
        radial_segments: cli.radial_segments,
        texture_height: cli.texture_height,
        uv_mode: cli.uv_mode.into(),
    };

    match revolve_prep::build_proxy(&config) {
        Ok(asset) => {
            if !cli.quiet {
                let texture = match asset.texture_size {
                    Some((w, h)) => format!("atlas {}×{}", w, h),
                    None => "existing texture".to_string(),
                };
                eprintln!(
                    "Success: Proxy generated from {}: {} ({} samples -> {} vertices, {} faces)",
                    asset.source.display(),
                    asset.mesh_path.display(),
                    asset.sample_count,
                    asset.vertex_count,
                    asset.face_count
                );
                eprintln!("  Texture: {} ({})", asset.texture_path.display(), texture);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
