use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for map loading.
///
/// `NotFound` and `Malformed` are the two domain kinds; they propagate
/// unchanged out of the parser. Read failures that are neither (a file that
/// exists but cannot be stat'd or opened) surface as `Io`.
#[derive(Error, Diagnostic, Debug)]
pub enum MapError {
    #[error("Map file not found: {path}")]
    #[diagnostic(code(hymap::not_found))]
    NotFound { path: PathBuf },

    #[error("Malformed map file {path}: {message}")]
    #[diagnostic(code(hymap::malformed))]
    Malformed {
        path: PathBuf,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(hymap::io))]
    Io { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, MapError>;
