//! Error types for documentation generation
//!
//! None of these are fatal to the process: parsers turn them into an empty
//! [`ParseResult`](crate::schema::ParseResult), the renderer turns an
//! unsupported type into an empty document and the command layer turns a
//! missing input into a no-op. Only failing to write the output surfaces as
//! a non-zero exit.

use std::process::ExitCode;
use thiserror::Error;

/// Errors raised while parsing sources or writing documentation
#[derive(Error, Debug)]
pub enum DocgenError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Unsupported file type: {extension}")]
    UnsupportedLanguage { extension: String },

    #[error("Parse failure: {message}")]
    ParseFailure { message: String },

    #[error("Companion parser not found: {message}")]
    CompanionNotFound { message: String },

    #[error("Companion parser failed: {message}")]
    CompanionFailure { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DocgenError {
    /// Process exit code for this error
    ///
    /// The binary only surfaces `Io`; the other codes are for library
    /// callers that use the strict `SourceParser::try_parse` path.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::from(2),
            Self::UnsupportedLanguage { .. } => ExitCode::from(3),
            Self::ParseFailure { .. }
            | Self::CompanionNotFound { .. }
            | Self::CompanionFailure { .. } => ExitCode::from(4),
            Self::Io(_) => ExitCode::from(5),
        }
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, DocgenError>;
