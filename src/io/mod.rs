mod binary;
mod error;
mod intel_hex;

pub use binary::parse_binary;
pub use error::EncodeError;
pub use intel_hex::{
    DEFAULT_LOAD_ADDRESS, IntelHexWriteOptions, MAX_RECORD_DATA, Record, RecordType, encode_intel_hex,
    write_intel_hex,
};
