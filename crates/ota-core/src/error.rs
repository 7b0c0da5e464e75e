//! Error types shared by the codec, URL derivation and document generation.

use std::path::PathBuf;

use thiserror::Error;

/// A token or percent-encoded value that could not be decoded.
///
/// Tokens come from request paths, so this is a client error, not a bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid percent-encoding in {0:?}")]
    Percent(String),
    #[error("token {0:?} is not valid base64")]
    Base64(String),
    #[error("decoded token is not valid UTF-8")]
    Utf8,
}

#[derive(Debug, Error)]
pub enum OtaError {
    /// The reference URL does not end with a short file extension (e.g. `.htm`).
    #[error("reference does not end with a file name (e.g. .htm): {0}")]
    MalformedReference(String),

    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("template file not found at {}", .0.display())]
    TemplateFileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OtaError>;
