use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("TMDB returned {status}: {body}")]
    RemoteService { status: StatusCode, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Could not read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),
}

pub type Result<T> = std::result::Result<T, SyncError>;
