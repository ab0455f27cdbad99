use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserPageError {
    #[error("invalid pin {0}: must be 0..=255")]
    InvalidPin(u32),

    #[error("serial number is {len} bytes, at most {max} fit ahead of the configuration word")]
    SerialTooLong { len: usize, max: usize },
}
