//! Errors raised while preparing input or walking a document.

use deltapdf_delta::DeltaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    /// The input is neither a raw nor a parsed document (or a homogeneous array of them).
    #[error("{0}")]
    InvalidInput(String),

    #[error("Input array is empty")]
    EmptyInput,

    #[error("Document JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Delta parsing failed: {0}")]
    Delta(#[from] DeltaError),

    /// A formatted paragraph whose attribute record sets none of the recognized flags.
    #[error("Paragraph {paragraph} has line attributes but no recognized line flag")]
    UnrecognizedLineAttributes { paragraph: usize },

    #[error("Header level {0} is not supported")]
    UnsupportedHeaderLevel(u8),

    #[error("Ordered list depth {depth} exceeds the supported maximum of 5")]
    ListDepthExceeded { depth: usize },

    #[error("Ordered list at depth {depth} ran out of indicators at item {index}")]
    IndicatorExhausted { depth: usize, index: usize },
}
