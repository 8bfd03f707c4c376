//! The public export entry points.

use deltapdf_core::DocumentBuilder;
use deltapdf_render_core::{CommandRecorder, DrawingBackend};
use deltapdf_render_lopdf::LopdfBackend;
use serde_json::Value;

use crate::config::{ExportConfig, ExportFormat};
use crate::error::ExportError;

type Backend = Box<dyn DrawingBackend + Send>;

fn backend_for(format: ExportFormat) -> Backend {
    match format {
        ExportFormat::Pdf => Box::new(LopdfBackend::default()),
        ExportFormat::Commands => Box::new(CommandRecorder::new()),
    }
}

/// Prepares the input and walks every paragraph into a fresh backend.
fn draw(input: &Value, config: &ExportConfig) -> Result<Backend, ExportError> {
    let builder = DocumentBuilder::new();
    let documents = builder.prepare(input)?;
    let mut backend = backend_for(config.export_as);
    let summary = builder.build(&documents, &config.styles, backend.as_mut())?;
    log::debug!(
        "Drew {} paragraph(s) as {:?}",
        summary.paragraphs,
        config.export_as
    );
    Ok(backend)
}

/// Exports `input` (a raw delta, a parsed document, or an array of either).
///
/// Input errors return before anything is drawn. The backend's finishing work
/// runs on the blocking pool, and its failures surface through this future.
pub async fn generate_pdf(input: Value, config: &ExportConfig) -> Result<Vec<u8>, ExportError> {
    let backend = draw(&input, config)?;
    let bytes = tokio::task::spawn_blocking(move || backend.finish())
        .await
        .map_err(|e| ExportError::Join(e.to_string()))??;
    Ok(bytes)
}

/// Like [`generate_pdf`], without an async runtime.
pub fn generate_blocking(input: &Value, config: &ExportConfig) -> Result<Vec<u8>, ExportError> {
    let backend = draw(input, config)?;
    Ok(backend.finish()?)
}
