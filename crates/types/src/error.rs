use thiserror::Error;

/// Errors raised while converting the serialized document shape into the model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("paragraph has both an embed and text runs")]
    EmbedWithRuns,
    #[error("embed must contain exactly one of 'image' or 'video'")]
    InvalidEmbed,
    #[error("run must contain either 'text' or 'formula'")]
    EmptyRun,
    #[error("unknown list kind '{0}'")]
    UnknownListKind(String),
}
