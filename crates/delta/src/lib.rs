//! Raw delta input and its normalization into a `ParsedDocument`.
//!
//! A delta is a list of insert operations. Text inserts carry inline attributes;
//! the attributes on a newline apply to the line that newline terminates.

mod error;
mod model;
mod parser;

pub use error::DeltaError;
pub use model::{DeltaOp, Insert, RawDelta};
pub use parser::{DeltaParser, QuillDeltaParser};
