//! Inline runs: spans of text or formulas sharing one set of attributes.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ModelError;

/// The printable content of a run. Formulas are rendered as literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunContent {
    Text(String),
    Formula(String),
}

impl RunContent {
    pub fn as_str(&self) -> &str {
        match self {
            RunContent::Text(s) | RunContent::Formula(s) => s,
        }
    }
}

/// A contiguous span of content with optional inline formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RunRepr", into = "RunRepr")]
pub struct Run {
    pub content: RunContent,
    pub attributes: Option<RunAttributes>,
}

impl Run {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: RunContent::Text(text.into()),
            attributes: None,
        }
    }

    pub fn formula(formula: impl Into<String>) -> Self {
        Self {
            content: RunContent::Formula(formula.into()),
            attributes: None,
        }
    }

    pub fn with_attributes(mut self, attributes: RunAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn content_str(&self) -> &str {
        self.content.as_str()
    }
}

#[derive(Serialize, Deserialize)]
struct RunRepr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    formula: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attributes: Option<RunAttributes>,
}

impl TryFrom<RunRepr> for Run {
    type Error = ModelError;

    fn try_from(repr: RunRepr) -> Result<Self, Self::Error> {
        // Non-empty text takes precedence over a formula.
        let content = match (repr.text, repr.formula) {
            (Some(text), _) if !text.is_empty() => RunContent::Text(text),
            (_, Some(formula)) => RunContent::Formula(formula),
            (Some(text), None) => RunContent::Text(text),
            (None, None) => return Err(ModelError::EmptyRun),
        };
        Ok(Run {
            content,
            attributes: repr.attributes,
        })
    }
}

impl From<Run> for RunRepr {
    fn from(run: Run) -> Self {
        let (text, formula) = match run.content {
            RunContent::Text(t) => (Some(t), None),
            RunContent::Formula(f) => (None, Some(f)),
        };
        RunRepr {
            text,
            formula,
            attributes: run.attributes,
        }
    }
}

/// Inline formatting attached to a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunAttributes {
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strike: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(
        default,
        deserialize_with = "RunSize::deserialize_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<RunSize>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Relative run size. Offsets apply to the paragraph's base size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunSize {
    Small,
    Large,
    Huge,
}

impl RunSize {
    /// Point offset applied to the base font size.
    pub fn offset(self) -> f32 {
        match self {
            RunSize::Small => -4.0,
            RunSize::Large => 4.0,
            RunSize::Huge => 6.0,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "small" => Some(RunSize::Small),
            "large" => Some(RunSize::Large),
            "huge" => Some(RunSize::Huge),
            _ => None,
        }
    }

    /// Unrecognized sizes (e.g. pixel values from custom toolbars) are dropped.
    fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(Self::parse))
    }
}
