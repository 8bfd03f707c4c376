//! Core rendering abstractions.
//!
//! This crate provides the seam between the translation engine and a page-layout backend:
//! - `DrawingBackend` trait: the drawing primitives the engine issues, one call per instruction
//! - `DrawCommand`: a serializable record of those calls
//! - `CommandRecorder`: a backend that captures the instruction stream
//! - Error types for rendering operations

mod command;
mod error;
mod recorder;
mod traits;

pub use command::{DrawCommand, ImageAlign, ImageOptions, TextOptions};
pub use error::RenderError;
pub use recorder::CommandRecorder;
pub use traits::DrawingBackend;
