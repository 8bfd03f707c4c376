use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeltaError {
    #[error("Delta JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported embed in op {index}: expected 'image', 'video' or 'formula', found {keys:?}")]
    UnsupportedEmbed { index: usize, keys: Vec<String> },

    #[error("Invalid attributes in op {index}: {source}")]
    InvalidAttributes {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}
