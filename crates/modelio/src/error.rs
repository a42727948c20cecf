//! Error types for model codecs

use std::fmt;
use thiserror::Error;

/// Result type alias using ModelIO's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// The per-vertex attribute a face index refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Position,
    Normal,
    Uv,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Position => "position",
            Self::Normal => "normal",
            Self::Uv => "uv",
        })
    }
}

/// Errors that can occur while reading or writing a model
#[derive(Error, Debug)]
pub enum Error {
    /// Input bytes are not valid UTF-8 text
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    /// A face refers to an attribute that does not exist (yet)
    #[error("Malformed reference on line {line}: {kind} index {index} is out of range")]
    MalformedReference {
        /// 1-based line number in the source text
        line: usize,
        kind: AttributeKind,
        /// The index as written in the file
        index: usize,
    },

    /// The codec does not claim the file's extension
    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
