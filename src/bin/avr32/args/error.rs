use std::path::PathBuf;

use thiserror::Error;

use avr32_hex::{EncodeError, ErrorKind, UserPageError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] avr32_hex::Error),
    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{}: configuration word must be 4 bytes, got {len}", .path.display())]
    InvalidConfigFile { path: PathBuf, len: usize },
}

impl CliError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Core(e) => e.kind(),
            Self::File { .. } => ErrorKind::Io,
            Self::InvalidConfigFile { .. } => ErrorKind::InvalidArgument,
        }
    }
}

impl From<EncodeError> for CliError {
    fn from(e: EncodeError) -> Self {
        Self::Core(e.into())
    }
}

impl From<UserPageError> for CliError {
    fn from(e: UserPageError) -> Self {
        Self::Core(e.into())
    }
}
