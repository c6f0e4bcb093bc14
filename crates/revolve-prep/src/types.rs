use revolve_core::{UvMode, DEFAULT_RADIAL_SEGMENTS, DEFAULT_TEXTURE_HEIGHT};
use std::path::PathBuf;

/// Configuration for one proxy geometry build.
#[derive(Debug, Clone)]
pub struct PrepConfig {
    /// Line-delimited silhouette samples (*.lst).
    pub contour_path: PathBuf,
    /// Texture referenced by the mesh. Written in arc-length mode,
    /// must already exist in uniform mode.
    pub texture_path: PathBuf,
    /// Output PLY path.
    pub output_mesh: PathBuf,
    /// Radial segment count (default: 10).
    pub radial_segments: u32,
    /// Atlas vertical resolution in pixels (default: 1000).
    pub texture_height: u32,
    /// UV parameterization.
    pub uv_mode: PrepMode,
}

/// UV parameterization selected for a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrepMode {
    /// Uniform V; the texture is supplied by the user.
    Uniform,
    /// Arc-length V; the texture atlas is generated.
    #[default]
    ArcLength,
}

impl PrepConfig {
    /// Config with default segment count, texture height and mode.
    pub fn new(contour_path: PathBuf, texture_path: PathBuf, output_mesh: PathBuf) -> Self {
        Self {
            contour_path,
            texture_path,
            output_mesh,
            radial_segments: DEFAULT_RADIAL_SEGMENTS,
            texture_height: DEFAULT_TEXTURE_HEIGHT,
            uv_mode: PrepMode::default(),
        }
    }

    /// Core UV mode for this build.
    pub fn mesh_mode(&self) -> UvMode {
        match self.uv_mode {
            PrepMode::Uniform => UvMode::Uniform,
            PrepMode::ArcLength => UvMode::ArcLength {
                texture_height: Some(self.texture_height),
            },
        }
    }
}

/// Summary of a finished build.
#[derive(Debug, Clone)]
pub struct ProxyAsset {
    /// Source contour file.
    pub source: PathBuf,
    /// Number of silhouette samples read.
    pub sample_count: usize,
    /// Vertices written to the PLY file.
    pub vertex_count: usize,
    /// Triangles written to the PLY file.
    pub face_count: usize,
    /// Written PLY path.
    pub mesh_path: PathBuf,
    /// Texture path referenced by the mesh.
    pub texture_path: PathBuf,
    /// Generated atlas size (width, height), if one was written.
    pub texture_size: Option<(u32, u32)>,
}
