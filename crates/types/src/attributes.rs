//! Paragraph-level (line) attributes.

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::ModelError;

/// The kind of list a paragraph belongs to.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Bullet,
    Ordered,
}

impl ListKind {
    /// Checklist items (`checked` / `unchecked`) are drawn as bullets.
    pub fn parse(s: &str) -> Result<Self, ModelError> {
        match s {
            "bullet" | "checked" | "unchecked" => Ok(ListKind::Bullet),
            "ordered" => Ok(ListKind::Ordered),
            other => Err(ModelError::UnknownListKind(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for ListKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

/// Line attributes are not mutually exclusive; each recognized flag is
/// evaluated independently when the paragraph is dispatched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<u8>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub blockquote: bool,
    #[serde(rename = "code-block", default, skip_serializing_if = "std::ops::Not::not")]
    pub code_block: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<ListKind>,
    /// 0-based list nesting depth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent: Option<usize>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub citation: bool,
}

impl LineAttributes {
    pub fn header(level: u8) -> Self {
        Self {
            header: Some(level),
            ..Default::default()
        }
    }

    pub fn list(kind: ListKind, indent: usize) -> Self {
        Self {
            list: Some(kind),
            indent: (indent > 0).then_some(indent),
            ..Default::default()
        }
    }

    /// True when at least one flag the dispatcher acts on is set.
    /// A bare `indent` is not a flag on its own.
    pub fn has_recognized_flag(&self) -> bool {
        self.header.is_some()
            || self.blockquote
            || self.code_block
            || self.list.is_some()
            || self.citation
    }

    pub fn depth(&self) -> usize {
        self.indent.unwrap_or(0)
    }
}
