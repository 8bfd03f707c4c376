//! # deltapdf-core
//!
//! The translation engine that turns parsed rich-text documents into drawing
//! instructions for a `DrawingBackend`:
//! - **context**: per-build style table and list counters
//! - **numbering**: the six-depth ordered-list counter state machine
//! - **runs**: run attribute resolution and line continuation
//! - **dispatch**: paragraph classification and the per-kind builders
//! - **list_item**: list marker placement and item indentation
//! - **builder**: the document driver
//! - **input**: raw/parsed input discrimination
//!
//! All mutable state lives in a `BuildContext` created fresh for every build,
//! so separate builds never observe each other.

pub mod builder;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod input;
pub mod list_item;
pub mod numbering;
pub mod runs;

pub use deltapdf_delta as delta;
pub use deltapdf_render_core as render;
pub use deltapdf_style as style;
pub use deltapdf_types as types;

pub use builder::{BuildSummary, DocumentBuilder};
pub use context::BuildContext;
pub use dispatch::ParagraphDispatcher;
pub use error::BuildError;
pub use input::{DocumentInput, prepare_input};
pub use list_item::{ListItemLayout, PAGE_TEXT_WIDTH};
pub use numbering::ListCounters;
pub use runs::{TextBase, emit_runs};
