pub mod error;
pub mod io;
pub mod segment;
pub mod userpage;

pub use error::{Error, ErrorKind};
pub use io::{
    DEFAULT_LOAD_ADDRESS, EncodeError, IntelHexWriteOptions, MAX_RECORD_DATA, Record, RecordType,
    encode_intel_hex, parse_binary, write_intel_hex,
};
pub use segment::Segment;
pub use userpage::{
    BootPin, CFG_WORD_MAGIC, ConfigWord, DEFAULT_BOOT_PIN, MAX_SERIAL_LEN, USER_PAGE_ADDRESS,
    USER_PAGE_SIZE, UserPageError, UserPageOptions, build_user_page, checked_pin, crc8,
};
