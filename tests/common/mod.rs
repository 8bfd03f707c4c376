pub mod fixtures;
pub mod pdf_assertions;

use deltapdf::{DrawCommand, ExportConfig, ExportError, ExportFormat, generate_pdf};
use lopdf::Document as LopdfDocument;
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    pub fn text(&self) -> String {
        pdf_assertions::extract_text(&self.doc)
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Run the async export on a fresh runtime.
pub fn export(input: Value, config: &ExportConfig) -> Result<Vec<u8>, ExportError> {
    tokio::runtime::Runtime::new()?.block_on(generate_pdf(input, config))
}

/// Export `input` to PDF with default styles.
pub fn export_pdf(input: Value) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    export_pdf_with_config(input, &ExportConfig::default())
}

pub fn export_pdf_with_config(
    input: Value,
    config: &ExportConfig,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = export(input, config)?;
    GeneratedPdf::from_bytes(bytes)
}

/// Export `input` as its drawing instruction stream.
pub fn export_commands(
    input: Value,
    config: ExportConfig,
) -> Result<Vec<DrawCommand>, Box<dyn std::error::Error>> {
    let config = config.with_export_format(ExportFormat::Commands);
    let bytes = export(input, &config)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Every `DrawText` content in order.
#[allow(dead_code)]
pub fn drawn_texts(commands: &[DrawCommand]) -> Vec<String> {
    commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::DrawText { content, .. } => Some(content.clone()),
            _ => None,
        })
        .collect()
}

/// Texts drawn at horizontal position `x`.
#[allow(dead_code)]
pub fn texts_at(commands: &[DrawCommand], x: f32) -> Vec<String> {
    commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::DrawText { content, x: at, .. } if *at == x => Some(content.clone()),
            _ => None,
        })
        .collect()
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
