//! The style table: named paragraph styles with per-field override merging.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a built-in style name")]
pub struct UnknownStyleName(pub String);

/// The built-in style names. Every one of them always resolves to a complete entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleName {
    Normal,
    Header1,
    Header2,
    BlockQuote,
    CodeBlock,
    ListParagraph,
    Citation,
}

impl StyleName {
    pub const ALL: [StyleName; 7] = [
        StyleName::Normal,
        StyleName::Header1,
        StyleName::Header2,
        StyleName::BlockQuote,
        StyleName::CodeBlock,
        StyleName::ListParagraph,
        StyleName::Citation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StyleName::Normal => "normal",
            StyleName::Header1 => "header_1",
            StyleName::Header2 => "header_2",
            StyleName::BlockQuote => "block_quote",
            StyleName::CodeBlock => "code_block",
            StyleName::ListParagraph => "list_paragraph",
            StyleName::Citation => "citation",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// The documented default entry for this style, in points.
    pub fn default_entry(self) -> StyleEntry {
        match self {
            StyleName::Normal => StyleEntry::new("Times-Roman", 12.0, 72.0, 0.0),
            StyleName::Header1 => StyleEntry::new("Helvetica-Bold", 16.0, 72.0, 0.0),
            StyleName::Header2 => StyleEntry::new("Helvetica-Bold", 14.0, 72.0, 0.0),
            StyleName::BlockQuote => StyleEntry {
                italics: Some(true),
                indent: Some(Indent::default()),
                ..StyleEntry::new("Times-Italic", 12.0, 72.0, 0.0)
            },
            StyleName::CodeBlock => StyleEntry::new("Courier", 12.0, 72.0, 0.0),
            StyleName::ListParagraph => StyleEntry::new("Times-Roman", 12.0, 50.0, 25.0),
            StyleName::Citation => StyleEntry::new("Times-Roman", 12.0, 72.0, 0.0),
        }
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleName {
    type Err = UnknownStyleName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownStyleName(s.to_string()))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Indent {
    pub left: f32,
    pub right: f32,
}

/// A complete, resolved style.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StyleEntry {
    pub font: String,
    pub font_size: f32,
    pub base_indent: f32,
    pub level_indent: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italics: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent: Option<Indent>,
}

impl StyleEntry {
    pub fn new(font: &str, font_size: f32, base_indent: f32, level_indent: f32) -> Self {
        Self {
            font: font.to_string(),
            font_size,
            base_indent,
            level_indent,
            italics: None,
            indent: None,
        }
    }

    /// Shallow merge: every field present in `patch` replaces ours.
    pub fn apply(&mut self, patch: &StyleOverride) {
        if let Some(font) = &patch.font {
            self.font = font.clone();
        }
        if let Some(size) = patch.font_size {
            self.font_size = size;
        }
        if let Some(base) = patch.base_indent {
            self.base_indent = base;
        }
        if let Some(level) = patch.level_indent {
            self.level_indent = level;
        }
        if patch.italics.is_some() {
            self.italics = patch.italics;
        }
        if patch.indent.is_some() {
            self.indent = patch.indent;
        }
    }
}

/// A partial style supplied by the caller.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StyleOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_indent: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_indent: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italics: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent: Option<Indent>,
}

impl StyleOverride {
    pub fn font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn base_indent(mut self, indent: f32) -> Self {
        self.base_indent = Some(indent);
        self
    }

    pub fn level_indent(mut self, indent: f32) -> Self {
        self.level_indent = Some(indent);
        self
    }

    fn merge(&mut self, patch: &StyleOverride) {
        if patch.font.is_some() {
            self.font = patch.font.clone();
        }
        self.font_size = patch.font_size.or(self.font_size);
        self.base_indent = patch.base_indent.or(self.base_indent);
        self.level_indent = patch.level_indent.or(self.level_indent);
        self.italics = patch.italics.or(self.italics);
        self.indent = patch.indent.or(self.indent);
    }
}

/// Style name to partial style, as supplied once per build.
pub type StyleOverrides = BTreeMap<String, StyleOverride>;

/// Mutable style state for one build.
///
/// Built-in names live in a fixed slot array so lookups can never miss.
/// Caller-defined names are kept exactly as given.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    builtin: [StyleEntry; 7],
    custom: HashMap<String, StyleOverride>,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            builtin: StyleName::ALL.map(StyleName::default_entry),
            custom: HashMap::new(),
        }
    }
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores every built-in style and drops caller-defined names.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Merges `overrides` onto the current state, field by field.
    pub fn configure(&mut self, overrides: &StyleOverrides) {
        for (key, patch) in overrides {
            if let Ok(name) = key.parse::<StyleName>() {
                self.builtin[name.index()].apply(patch);
            } else if let Some(existing) = self.custom.get_mut(key) {
                existing.merge(patch);
            } else {
                self.custom.insert(key.clone(), patch.clone());
            }
        }
    }

    pub fn style(&self, name: StyleName) -> &StyleEntry {
        &self.builtin[name.index()]
    }

    pub fn custom(&self, name: &str) -> Option<&StyleOverride> {
        self.custom.get(name)
    }

    pub fn custom_names(&self) -> impl Iterator<Item = &str> {
        self.custom.keys().map(String::as_str)
    }
}
