use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("invalid column count {0}: must be 16 or 32")]
    InvalidColumns(u8),

    #[error("record holds {0} data bytes, at most 255 fit the byte count field")]
    RecordTooLong(usize),

    #[error("address overflow: {base_address:#X} + {len} bytes exceeds the 32-bit address space")]
    AddressOverflow { base_address: u32, len: usize },
}
