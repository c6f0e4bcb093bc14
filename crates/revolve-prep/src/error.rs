use revolve_core::MeshError;
use std::path::PathBuf;

/// Errors that can occur while preparing proxy geometry.
#[derive(Debug, thiserror::Error)]
pub enum PrepError {
    /// I/O error reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A contour file line is not a number.
    #[error("Contour parse error for {path} line {line}: {message}")]
    ContourParse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Failed to encode the texture atlas.
    #[error("Image encode error for {path}: {message}")]
    ImageEncode { path: PathBuf, message: String },

    /// Mesh arrays are empty or inconsistent at export time.
    #[error("Export mismatch: {0}")]
    ExportMismatch(String),

    /// Input validation failed (missing files, etc.).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Mesh or atlas generation rejected its input.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}
