mod cfg_word;
mod crc;
mod error;
mod page;

pub use cfg_word::{BootPin, CFG_WORD_MAGIC, ConfigWord, DEFAULT_BOOT_PIN, checked_pin};
pub use crc::crc8;
pub use error::UserPageError;
pub use page::{MAX_SERIAL_LEN, USER_PAGE_ADDRESS, USER_PAGE_SIZE, UserPageOptions, build_user_page};
