pub mod attributes;
pub mod color;
pub mod document;
pub mod error;
pub mod geometry;
pub mod run;

pub use attributes::{LineAttributes, ListKind};
pub use color::Color;
pub use document::{DocumentSetup, Embed, Hyperlink, Paragraph, ParsedDocument};
pub use error::ModelError;
pub use geometry::Size;
pub use run::{Run, RunAttributes, RunContent, RunSize};
