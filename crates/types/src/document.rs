//! Parsed documents and their paragraphs.

use serde::{Deserialize, Serialize};

use crate::attributes::LineAttributes;
use crate::error::ModelError;
use crate::run::Run;

/// A hyperlink collected while parsing a delta.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hyperlink {
    pub text: String,
    pub link: String,
}

/// Document-wide facts gathered by the delta parser. Not used for drawing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSetup {
    #[serde(default)]
    pub hyperlinks: Vec<Hyperlink>,
    #[serde(default)]
    pub numbered_lists: usize,
}

/// An ordered sequence of paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedDocument {
    #[serde(default)]
    pub setup: DocumentSetup,
    pub paragraphs: Vec<Paragraph>,
}

impl ParsedDocument {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            setup: DocumentSetup::default(),
            paragraphs,
        }
    }
}

/// A block-level embed occupying a paragraph of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Embed {
    /// Image source: a data URL, a file path or a URL.
    Image(String),
    /// Video reference, rendered as a link.
    Video(String),
}

#[derive(Serialize, Deserialize)]
struct EmbedRepr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    video: Option<String>,
}

impl TryFrom<EmbedRepr> for Embed {
    type Error = ModelError;

    fn try_from(repr: EmbedRepr) -> Result<Self, Self::Error> {
        match (repr.image, repr.video) {
            (Some(image), None) => Ok(Embed::Image(image)),
            (None, Some(video)) => Ok(Embed::Video(video)),
            _ => Err(ModelError::InvalidEmbed),
        }
    }
}

impl From<Embed> for EmbedRepr {
    fn from(embed: Embed) -> Self {
        match embed {
            Embed::Image(image) => EmbedRepr {
                image: Some(image),
                video: None,
            },
            Embed::Video(video) => EmbedRepr {
                image: None,
                video: Some(video),
            },
        }
    }
}

/// One paragraph of a document.
///
/// Serialized in the parser's camelCase shape: `{ textRuns, attributes?, embed? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ParagraphRepr", into = "ParagraphRepr")]
pub enum Paragraph {
    Embed(Embed),
    Formatted {
        runs: Vec<Run>,
        attributes: LineAttributes,
    },
    Plain {
        runs: Vec<Run>,
    },
}

impl Paragraph {
    pub fn plain(runs: Vec<Run>) -> Self {
        Paragraph::Plain { runs }
    }

    pub fn formatted(runs: Vec<Run>, attributes: LineAttributes) -> Self {
        Paragraph::Formatted { runs, attributes }
    }

    pub fn runs(&self) -> &[Run] {
        match self {
            Paragraph::Embed(_) => &[],
            Paragraph::Formatted { runs, .. } | Paragraph::Plain { runs } => runs,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Paragraph::Embed(Embed::Image(_)) => "image",
            Paragraph::Embed(Embed::Video(_)) => "video",
            Paragraph::Formatted { .. } => "formatted",
            Paragraph::Plain { .. } => "plain",
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParagraphRepr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text_runs: Option<Vec<Run>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attributes: Option<LineAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    embed: Option<EmbedRepr>,
}

impl TryFrom<ParagraphRepr> for Paragraph {
    type Error = ModelError;

    fn try_from(repr: ParagraphRepr) -> Result<Self, Self::Error> {
        if let Some(embed) = repr.embed {
            if repr.text_runs.as_ref().is_some_and(|runs| !runs.is_empty()) {
                return Err(ModelError::EmbedWithRuns);
            }
            return Ok(Paragraph::Embed(embed.try_into()?));
        }
        let runs = repr.text_runs.unwrap_or_default();
        Ok(match repr.attributes {
            Some(attributes) => Paragraph::Formatted { runs, attributes },
            None => Paragraph::Plain { runs },
        })
    }
}

impl From<Paragraph> for ParagraphRepr {
    fn from(paragraph: Paragraph) -> Self {
        match paragraph {
            Paragraph::Embed(embed) => ParagraphRepr {
                text_runs: None,
                attributes: None,
                embed: Some(embed.into()),
            },
            Paragraph::Formatted { runs, attributes } => ParagraphRepr {
                text_runs: Some(runs),
                attributes: Some(attributes),
                embed: None,
            },
            Paragraph::Plain { runs } => ParagraphRepr {
                text_runs: Some(runs),
                attributes: None,
                embed: None,
            },
        }
    }
}
