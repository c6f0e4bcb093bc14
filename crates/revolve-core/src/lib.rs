//! Solid-of-revolution proxy geometry.
//!
//! Turns a 1-D silhouette (radius per uniformly spaced height) into a
//! triangle mesh with UVs, and optionally a texture atlas mask matching the
//! arc-length UV layout. No file I/O happens here; loaders and exporters
//! live in `revolve-prep`.

/// Error types for mesh and atlas generation.
pub mod error;

/// Validated silhouette and derived per-sample values.
pub mod silhouette;

/// RGB8 raster buffer and scanline polygon fill.
pub mod raster;

/// Texture atlas mask generation.
pub mod atlas;

/// Mesh builder.
pub mod mesh;

pub use atlas::build_texture;
pub use error::{MeshError, Result};
pub use mesh::{
    build_mesh, MeshConfig, MeshData, UvMode, DEFAULT_RADIAL_SEGMENTS, DEFAULT_TEXTURE_HEIGHT,
};
pub use raster::TextureRaster;
pub use silhouette::{Silhouette, UBounds};
