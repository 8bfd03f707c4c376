use deltapdf_core::BuildError;
use deltapdf_render_core::RenderError;
use thiserror::Error;

/// Everything that can go wrong during an export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Build failed: {0}")]
    Build(#[from] BuildError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend's finishing task panicked or was cancelled.
    #[error("Finishing task failed: {0}")]
    Join(String),
}
