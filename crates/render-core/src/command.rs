use serde::{Deserialize, Serialize};

/// Formatting record passed with every text instruction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOptions {
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub strike: bool,
    #[serde(default)]
    pub oblique: bool,
    #[serde(default)]
    pub link: Option<String>,
    /// Keep the cursor on the current line after this text.
    #[serde(default)]
    pub continued: bool,
    /// Width of the text box, when constrained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageOptions {
    /// Bounding box `[width, height]` the image is scaled to fit.
    pub fit: [f32; 2],
    #[serde(default)]
    pub align: ImageAlign,
}

/// One drawing instruction, as issued to a backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "args", rename_all = "camelCase")]
pub enum DrawCommand {
    SetFont(String),
    SetFontSize(f32),
    SetFillColor(String),
    MoveDown(Option<f32>),
    MoveUp(Option<f32>),
    DrawText {
        content: String,
        x: f32,
        y: Option<f32>,
        options: TextOptions,
    },
    DrawImage {
        source: String,
        options: ImageOptions,
    },
}

impl DrawCommand {
    pub fn is_text(&self) -> bool {
        matches!(self, DrawCommand::DrawText { .. })
    }

    /// The text options when this is a text instruction.
    pub fn text_options(&self) -> Option<&TextOptions> {
        match self {
            DrawCommand::DrawText { options, .. } => Some(options),
            _ => None,
        }
    }
}
