//! Export rich-text deltas to PDF.
//!
//! ```no_run
//! # async fn run() -> Result<(), deltapdf::ExportError> {
//! let delta = serde_json::json!({ "ops": [{ "insert": "Hello\n" }] });
//! let pdf = deltapdf::generate_pdf(delta, &deltapdf::ExportConfig::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod exporter;

pub use config::{ExportConfig, ExportFormat};
pub use error::ExportError;
pub use exporter::{generate_blocking, generate_pdf};

pub use deltapdf_core::{BuildError, BuildSummary, DocumentBuilder};
pub use deltapdf_render_core::{CommandRecorder, DrawCommand, DrawingBackend, RenderError};
pub use deltapdf_render_lopdf::LopdfBackend;
pub use deltapdf_style::{StyleOverride, StyleOverrides};
pub use deltapdf_types::ParsedDocument;
