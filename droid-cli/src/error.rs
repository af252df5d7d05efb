use data_error::DroidError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Source and destination are the same file: {0}")]
    SameFile(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Contents differ")]
    ContentMismatch,

    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error(transparent)]
    DroidError(#[from] DroidError),
}
