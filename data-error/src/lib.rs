use std::net::AddrParseError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DroidError>;

#[derive(Error, Debug)]
pub enum DroidError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Illegal argument: {0}")]
    IllegalArgument(String),
    /// A "fully" variant ran out of data before the requested count.
    #[error("Length to read: {expected} actual: {actual}")]
    UnexpectedEof { expected: u64, actual: u64 },
    /// A skip ran out of data before discarding the requested count.
    #[error("Units to skip: {expected} actual: {actual}")]
    UnexpectedSkipEof { expected: u64, actual: u64 },
    #[error("Path error: {0}")]
    Path(String),
    #[error("URL error: {0}")]
    Url(String),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Parsing error")]
    Parse,
}

impl DroidError {
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument(message.into())
    }

    pub fn is_unexpected_eof(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedEof { .. } | Self::UnexpectedSkipEof { .. }
        )
    }
}

impl From<AddrParseError> for DroidError {
    fn from(_: AddrParseError) -> Self {
        Self::Parse
    }
}

impl From<url::ParseError> for DroidError {
    fn from(_: url::ParseError) -> Self {
        Self::Parse
    }
}

impl From<std::num::ParseIntError> for DroidError {
    fn from(_: std::num::ParseIntError) -> Self {
        Self::Parse
    }
}
