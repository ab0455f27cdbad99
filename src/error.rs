use thiserror::Error;

use crate::io::EncodeError;
use crate::userpage::UserPageError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    UserPage(#[from] UserPageError),
}

/// Coarse classification of [`Error`]. `Io` is reserved for callers that touch the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    BufferOverflow,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Encode(_) | Self::UserPage(UserPageError::InvalidPin(_)) => {
                ErrorKind::InvalidArgument
            }
            Self::UserPage(UserPageError::SerialTooLong { .. }) => ErrorKind::BufferOverflow,
        }
    }
}
