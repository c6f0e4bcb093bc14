use crate::error::PrepError;
use revolve_core::MeshData;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Check that a mesh can be exported.
///
/// Vertices, UVs and faces must be non-empty, there must be one UV per
/// vertex, and every face index must reference an existing vertex.
pub fn validate_mesh(mesh: &MeshData) -> Result<(), PrepError> {
    if mesh.vertices.is_empty() || mesh.uvs.is_empty() || mesh.faces.is_empty() {
        return Err(PrepError::ExportMismatch(format!(
            "Mesh has {} vertices, {} UVs, {} faces; all must be non-empty",
            mesh.vertices.len(),
            mesh.uvs.len(),
            mesh.faces.len()
        )));
    }

    if mesh.vertices.len() != mesh.uvs.len() {
        return Err(PrepError::ExportMismatch(format!(
            "{} vertices but {} UVs",
            mesh.vertices.len(),
            mesh.uvs.len()
        )));
    }

    let vertex_count = mesh.vertices.len();
    if let Some(face) = mesh
        .faces
        .iter()
        .find(|f| f.iter().any(|&idx| idx as usize >= vertex_count))
    {
        return Err(PrepError::ExportMismatch(format!(
            "Face {:?} references a vertex beyond {}",
            face, vertex_count
        )));
    }

    Ok(())
}

/// Write an ASCII PLY description of `mesh` to `out`.
///
/// Faces carry per-corner texture coordinates (`texcoord` list property);
/// the texture itself is referenced by a `TextureFile` comment.
pub fn write_ply_to<W: Write>(
    out: &mut W,
    mesh: &MeshData,
    texture_file: &str,
) -> Result<(), PrepError> {
    validate_mesh(mesh)?;

    writeln!(out, "ply")?;
    writeln!(out, "format ascii 1.0")?;
    writeln!(out, "comment TextureFile {}", texture_file)?;
    writeln!(out, "element vertex {}", mesh.vertices.len())?;
    writeln!(out, "property float x")?;
    writeln!(out, "property float y")?;
    writeln!(out, "property float z")?;
    writeln!(out, "element face {}", mesh.faces.len())?;
    writeln!(out, "property list uchar int vertex_indices")?;
    writeln!(out, "property list uchar float texcoord")?;
    writeln!(out, "end_header")?;

    for v in &mesh.vertices {
        writeln!(out, "{} {} {}", v.x, v.y, v.z)?;
    }

    for face in &mesh.faces {
        write!(out, "{} {} {} {}", face.len(), face[0], face[1], face[2])?;
        write!(out, " {}", face.len() * 2)?;
        for &idx in face {
            let uv = mesh.uvs[idx as usize];
            write!(out, " {} {}", uv.x, uv.y)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Render the PLY text in memory.
pub fn render_ply(mesh: &MeshData, texture_file: &str) -> Result<String, PrepError> {
    let mut buf = Vec::new();
    write_ply_to(&mut buf, mesh, texture_file)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the PLY file for `mesh`, referencing `texture_file`.
pub fn write_ply(path: &Path, mesh: &MeshData, texture_file: &Path) -> Result<(), PrepError> {
    // Validate before creating the file so a bad mesh leaves nothing behind.
    validate_mesh(mesh)?;

    let file = fs::File::create(path)?;
    let mut out = BufWriter::new(file);
    write_ply_to(&mut out, mesh, &texture_file.display().to_string())?;
    out.flush()?;

    log::info!(
        "  Wrote {} ({} vertices, {} faces)",
        path.display(),
        mesh.vertices.len(),
        mesh.faces.len()
    );
    Ok(())
}
