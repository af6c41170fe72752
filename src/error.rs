use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SeleneError>;

#[derive(Error, Debug)]
pub enum SeleneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid download link: '{url}'")]
    InvalidUrl { url: String },

    #[error("Server returned {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Could not create directory {path:?}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Permission denied: {path:?}")]
    PermissionDenied { path: PathBuf },

    #[error("Unknown catalog entry: '{key}'")]
    UnknownEntry { key: String },

    #[error("Invalid choice: '{input}'")]
    InvalidChoice { input: String },

    #[error("Input error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Interrupted by user")]
    Interrupted,
}

impl SeleneError {
    pub fn unknown_entry<S: Into<String>>(key: S) -> Self {
        SeleneError::UnknownEntry { key: key.into() }
    }

    /// True when the error came from the user aborting a blocking read.
    pub fn is_interrupt(&self) -> bool {
        match self {
            SeleneError::Interrupted => true,
            SeleneError::Io(e) => e.kind() == std::io::ErrorKind::Interrupted,
            SeleneError::Prompt(dialoguer::Error::IO(e)) => {
                e.kind() == std::io::ErrorKind::Interrupted
            }
            _ => false,
        }
    }
}
