/// Errors that can occur while building a mesh or texture atlas.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// A precondition on the silhouette, segment count or texture size failed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, MeshError>;
