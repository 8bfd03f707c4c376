use deltapdf_style::StyleOverrides;
use serde::{Deserialize, Serialize};

/// The artifact an export produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Pdf,
    /// The drawing instruction stream as JSON.
    Commands,
}

/// Per-export settings: output format and style overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfig {
    #[serde(default)]
    pub export_as: ExportFormat,
    #[serde(default, skip_serializing_if = "StyleOverrides::is_empty")]
    pub styles: StyleOverrides,
}

impl ExportConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_styles(mut self, styles: StyleOverrides) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_export_format(mut self, format: ExportFormat) -> Self {
        self.export_as = format;
        self
    }
}
