use std::fmt;

use super::UserPageError;
use super::crc::crc8;

/// Marker the ISP bootloader looks for in the top bits of the word.
pub const CFG_WORD_MAGIC: u16 = 0x494F;

/// Boot-select pin the AT32UC3 ships with configured.
pub const DEFAULT_BOOT_PIN: u8 = 5;

/// Pin condition that forces the bootloader to stay resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootPin {
    pub pin: u8,
    pub pin_high: bool,
}

/// Bootloader configuration word: magic, pin level and pin number followed by their CRC-8.
///
/// Bytes are held most significant first; `to_bytes()` is the 4-byte `ispcfg.bin` image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigWord([u8; 4]);

impl ConfigWord {
    pub fn encode(pin: u8, pin_high: bool) -> Self {
        let word3 = ((CFG_WORD_MAGIC as u32) << 9) | ((pin_high as u32) << 8) | pin as u32;
        tracing::debug!("first 3 bytes: {:#08X}", word3);

        let crc = crc8(word3 as u64);
        tracing::debug!("checksum (CRC8): {:#04X}", crc);

        let word = Self(((word3 << 8) | crc as u32).to_be_bytes());
        tracing::debug!("word is: {}", word);
        word
    }

    /// Like [`ConfigWord::encode`], but for pin numbers that have not been range checked yet.
    pub fn try_encode(pin: u32, pin_high: bool) -> Result<Self, UserPageError> {
        Ok(Self::encode(checked_pin(pin)?, pin_high))
    }

    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        self.0
    }

    pub fn decode(&self) -> BootPin {
        BootPin {
            pin: self.0[2],
            pin_high: self.0[1] % 2 == 1,
        }
    }

    pub fn crc_is_valid(&self) -> bool {
        let word3 = u32::from_be_bytes([0, self.0[0], self.0[1], self.0[2]]);
        crc8(word3 as u64) == self.0[3]
    }
}

/// Narrow a pin number to the byte the configuration word stores.
pub fn checked_pin(pin: u32) -> Result<u8, UserPageError> {
    u8::try_from(pin).map_err(|_| UserPageError::InvalidPin(pin))
}

impl fmt::Display for ConfigWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010X}", u32::from_be_bytes(self.0))
    }
}

impl fmt::Display for BootPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = if self.pin_high { "High" } else { "Low" };
        write!(f, "Pin {} {}", self.pin, level)
    }
}
