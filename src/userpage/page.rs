use super::UserPageError;
use super::cfg_word::{ConfigWord, DEFAULT_BOOT_PIN};

/// AT32UC3 user page base address.
pub const USER_PAGE_ADDRESS: u32 = 0x8080_0000;
pub const USER_PAGE_SIZE: usize = 512;

const CFG_WORD_OFFSET: usize = USER_PAGE_SIZE - 4;
/// Longest serial that still leaves room for its terminator ahead of the configuration word.
pub const MAX_SERIAL_LEN: usize = CFG_WORD_OFFSET - 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPageOptions {
    pub serial: String,
    /// Boot-select pin; `None` leaves the configuration word erased.
    pub pin: Option<u8>,
    pub pin_high: bool,
}

impl Default for UserPageOptions {
    fn default() -> Self {
        Self {
            serial: String::new(),
            pin: Some(DEFAULT_BOOT_PIN),
            pin_high: false,
        }
    }
}

impl UserPageOptions {
    pub fn build(&self) -> Result<[u8; USER_PAGE_SIZE], UserPageError> {
        build_user_page(&self.serial, self.pin, self.pin_high)
    }
}

/// Lay out a 512-byte user page.
///
/// The serial number is written from offset 0 followed by a NUL, the configuration
/// word (if any) occupies the last 4 bytes in reverse byte order, and everything
/// else stays erased at 0xFF.
pub fn build_user_page(
    serial: &str,
    pin: Option<u8>,
    pin_high: bool,
) -> Result<[u8; USER_PAGE_SIZE], UserPageError> {
    let serial = serial.as_bytes();
    if serial.len() > MAX_SERIAL_LEN {
        return Err(UserPageError::SerialTooLong {
            len: serial.len(),
            max: MAX_SERIAL_LEN,
        });
    }

    let mut page = [0xFF; USER_PAGE_SIZE];

    if !serial.is_empty() {
        page[..serial.len()].copy_from_slice(serial);
        page[serial.len()] = 0x00;
    }

    if let Some(pin) = pin {
        let word = ConfigWord::encode(pin, pin_high).to_bytes();
        for (slot, byte) in page[CFG_WORD_OFFSET..].iter_mut().zip(word.iter().rev()) {
            *slot = *byte;
        }
    }

    Ok(page)
}
