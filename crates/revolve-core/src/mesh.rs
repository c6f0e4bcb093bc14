//! Solid-of-revolution mesh builder.
//!
//! The silhouette is revolved about the Z axis. Vertices are laid out ring
//! by ring: ring `j` holds one vertex per silhouette sample, so vertex
//! `(j, i)` lives at index `j * v_segments + i`. One extra ring at
//! `j = r_segments` closes the seam without index wraparound; it repeats
//! ring 0's positions with `u` at the far edge of the texture.

use crate::atlas;
use crate::error::{MeshError, Result};
use crate::raster::TextureRaster;
use crate::silhouette::{Silhouette, UBounds};
use glam::{DVec2, DVec3};
use std::f64::consts::TAU;

/// Radial segment count used when none is configured.
pub const DEFAULT_RADIAL_SEGMENTS: u32 = 10;

/// Atlas vertical resolution used when none is configured.
pub const DEFAULT_TEXTURE_HEIGHT: u32 = 1000;

/// How the V coordinate (and U warping) is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UvMode {
    /// `v = i / v_segments`, `u = j / r_segments`, heights in `[0, 1)`.
    #[default]
    Uniform,
    /// `v` follows normalized arc length and `u` is warped into the per-row
    /// U envelope. Heights span `[-1, 1]`. A texture atlas is rasterized
    /// when `texture_height` is set.
    ArcLength { texture_height: Option<u32> },
}

impl UvMode {
    /// Minimum silhouette length accepted by this mode.
    pub fn min_samples(&self) -> usize {
        match self {
            UvMode::Uniform => 1,
            UvMode::ArcLength { .. } => 2,
        }
    }

    /// Short human-readable mode name.
    pub fn name(&self) -> &'static str {
        match self {
            UvMode::Uniform => "uniform",
            UvMode::ArcLength { .. } => "arc-length",
        }
    }
}

/// Mesh generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshConfig {
    /// Number of radial segments (at least 3).
    pub r_segments: u32,
    /// UV parameterization.
    pub mode: UvMode,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            r_segments: DEFAULT_RADIAL_SEGMENTS,
            mode: UvMode::Uniform,
        }
    }
}

/// Generated mantle surface with positionally aligned UVs.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// Vertex positions, `(r_segments + 1) * v_segments` entries.
    pub vertices: Vec<DVec3>,
    /// One UV per vertex.
    pub uvs: Vec<DVec2>,
    /// Triangles as vertex indices.
    pub faces: Vec<[u32; 3]>,
    /// Atlas mask, present only for arc-length mode with a texture height.
    pub texture: Option<TextureRaster>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Axis-aligned bounding box of all vertices.
    ///
    /// Returns `(DVec3::ZERO, DVec3::ZERO)` for an empty mesh.
    pub fn aabb(&self) -> (DVec3, DVec3) {
        let Some(&first) = self.vertices.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        self.vertices[1..]
            .iter()
            .fold((first, first), |(min, max), &v| (min.min(v), max.max(v)))
    }
}

/// Per-sample values that differ between UV modes.
struct Columns {
    heights: Vec<f64>,
    v_coords: Vec<f64>,
    envelope: Vec<UBounds>,
    texture: Option<TextureRaster>,
}

impl Columns {
    fn uniform(v_segments: usize) -> Self {
        let t: Vec<f64> = (0..v_segments)
            .map(|i| i as f64 / v_segments as f64)
            .collect();
        Self {
            heights: t.clone(),
            v_coords: t,
            envelope: vec![
                UBounds {
                    u_min: 0.0,
                    u_max: 1.0,
                };
                v_segments
            ],
            texture: None,
        }
    }

    fn arc_length(silhouette: &Silhouette, texture_height: Option<u32>) -> Result<Self> {
        let envelope = silhouette.u_envelope()?;
        let offsets = silhouette.arc_length_offsets();
        let last = (silhouette.len() - 1) as f64;
        let heights = (0..silhouette.len())
            .map(|i| 2.0 * i as f64 / last - 1.0)
            .collect();
        let texture = texture_height
            .map(|h| atlas::rasterize(&offsets, &envelope, silhouette.max_radius(), h))
            .transpose()?;

        Ok(Self {
            heights,
            v_coords: offsets,
            envelope,
            texture,
        })
    }
}

/// Revolve `silhouette` into a triangle mesh.
///
/// All preconditions are checked before any geometry is produced:
/// `r_segments >= 3`, enough samples for the mode, a non-zero silhouette for
/// arc-length mode, and an index range that fits in `u32`.
///
/// Both triangles of each quad wind counter-clockwise when seen from
/// outside, so face normals point away from the axis.
pub fn build_mesh(silhouette: &Silhouette, config: &MeshConfig) -> Result<MeshData> {
    let r_segments = config.r_segments;
    let v_segments = silhouette.len();

    if r_segments < 3 {
        return Err(MeshError::InvalidArgument(format!(
            "At least 3 radial segments required, got {}",
            r_segments
        )));
    }
    if v_segments < config.mode.min_samples() {
        return Err(MeshError::InvalidArgument(format!(
            "{} mode needs at least {} silhouette samples, got {}",
            config.mode.name(),
            config.mode.min_samples(),
            v_segments
        )));
    }

    let vertex_count = (r_segments as usize + 1)
        .checked_mul(v_segments)
        .filter(|&n| n <= u32::MAX as usize)
        .ok_or_else(|| {
            MeshError::InvalidArgument(format!(
                "{} radial segments x {} samples exceeds the u32 index range",
                r_segments, v_segments
            ))
        })?;

    let columns = match config.mode {
        UvMode::Uniform => Columns::uniform(v_segments),
        UvMode::ArcLength { texture_height } => Columns::arc_length(silhouette, texture_height)?,
    };

    let stride = v_segments as u32;
    let mut vertices = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);
    let mut faces = Vec::with_capacity(r_segments as usize * (v_segments - 1) * 2);

    for j in 0..=r_segments {
        // The closing ring reuses ring 0's angle so the seam positions match exactly.
        let angle = TAU * f64::from(j % r_segments) / f64::from(r_segments);
        let (sin, cos) = angle.sin_cos();
        let t = f64::from(j) / f64::from(r_segments);

        for (i, &radius) in silhouette.samples().iter().enumerate() {
            let curr = vertices.len() as u32;
            vertices.push(DVec3::new(cos * radius, sin * radius, columns.heights[i]));
            uvs.push(DVec2::new(columns.envelope[i].lerp(t), columns.v_coords[i]));

            if j > 0 && i > 0 {
                faces.push([curr - stride - 1, curr - 1, curr]);
                faces.push([curr, curr - stride, curr - stride - 1]);
            }
        }
    }

    log::debug!(
        "Revolved {} samples x {} segments: {} vertices, {} faces",
        v_segments,
        r_segments,
        vertices.len(),
        faces.len()
    );

    Ok(MeshData {
        vertices,
        uvs,
        faces,
        texture: columns.texture,
    })
}
