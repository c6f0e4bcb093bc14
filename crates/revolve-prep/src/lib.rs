/// Error types for proxy geometry preparation.
pub mod error;

/// Core type definitions (build config, build summary).
pub mod types;

/// Line-delimited silhouette contour loading.
pub mod contour_loader;

/// ASCII PLY mesh export.
pub mod ply_writer;

/// PNG texture atlas export.
pub mod png_writer;

pub use error::PrepError;
pub use types::{PrepConfig, PrepMode, ProxyAsset};

use revolve_core::{build_mesh, MeshConfig, Silhouette};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Build a proxy mesh (and atlas, in arc-length mode) from `config`.
///
/// Pipeline: load contour → validate silhouette → revolve → stage atlas PNG
/// → write PLY → move atlas into place. Every input check runs before the
/// first output file is written, and an existing texture is only replaced
/// once the PLY has been written.
pub fn build_proxy(config: &PrepConfig) -> Result<ProxyAsset, PrepError> {
    if !config.contour_path.is_file() {
        return Err(PrepError::Validation(format!(
            "Contour file not found: {}",
            config.contour_path.display()
        )));
    }
    if config.uv_mode == PrepMode::Uniform && !config.texture_path.is_file() {
        return Err(PrepError::Validation(format!(
            "Texture file not found: {} (uniform mode references an existing texture)",
            config.texture_path.display()
        )));
    }

    log::info!("Loading contour: {}", config.contour_path.display());
    let samples = contour_loader::load_contour(&config.contour_path)?;
    let sample_count = samples.len();
    let silhouette = Silhouette::new(samples)?;

    if silhouette.max_radius() == 0.0 {
        log::warn!("Silhouette is all zero; the mesh collapses onto the axis");
    }

    let mesh_config = MeshConfig {
        r_segments: config.radial_segments,
        mode: config.mesh_mode(),
    };
    log::info!(
        "Revolving {} samples, {} radial segments, {:?}",
        sample_count,
        mesh_config.r_segments,
        config.uv_mode
    );
    let mesh = build_mesh(&silhouette, &mesh_config)?;
    ply_writer::validate_mesh(&mesh)?;

    let staged = match &mesh.texture {
        Some(raster) => {
            let staging = staging_path(&config.texture_path);
            png_writer::write_texture(&staging, raster)?;
            Some((staging, (raster.width(), raster.height())))
        }
        None => None,
    };

    if let Err(e) = ply_writer::write_ply(&config.output_mesh, &mesh, &config.texture_path) {
        if let Some((staging, _)) = &staged {
            if let Err(cleanup) = fs::remove_file(staging) {
                log::warn!("Could not remove {}: {}", staging.display(), cleanup);
            }
        }
        return Err(e);
    }

    let texture_size = match staged {
        Some((staging, size)) => {
            fs::rename(&staging, &config.texture_path)?;
            log::info!("  Atlas moved to {}", config.texture_path.display());
            Some(size)
        }
        None => None,
    };

    Ok(ProxyAsset {
        source: config.contour_path.clone(),
        sample_count,
        vertex_count: mesh.vertex_count(),
        face_count: mesh.face_count(),
        mesh_path: config.output_mesh.clone(),
        texture_path: config.texture_path.clone(),
        texture_size,
    })
}

/// Sibling of `path` the atlas is encoded to before the PLY is written.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    if let Some(file_name) = path.file_name() {
        name.push(file_name);
    }
    name.push(".part.png");
    path.with_file_name(name)
}
