use std::fmt;

use super::EncodeError;
use super::binary::check_fits;
use crate::Segment;

/// Start of AT32UC3 internal flash.
pub const DEFAULT_LOAD_ADDRESS: u32 = 0x8000_0000;

const WINDOW_SIZE: u64 = 0x10000;
const SIZE_PREFIX_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RecordType {
    Data = 0x00,
    EndOfFile = 0x01,
    ExtendedLinearAddress = 0x04,
}

/// Most data bytes the 8-bit byte count field can describe.
pub const MAX_RECORD_DATA: usize = 0xFF;

/// One Intel HEX line. `byte_count` and `checksum` are derived from the other fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    address: u16,
    record_type: RecordType,
    data: Vec<u8>,
}

impl Record {
    pub fn new_data(address: u16, data: Vec<u8>) -> Result<Self, EncodeError> {
        if data.len() > MAX_RECORD_DATA {
            return Err(EncodeError::RecordTooLong(data.len()));
        }
        Ok(Self::unchecked_data(address, data))
    }

    fn unchecked_data(address: u16, data: Vec<u8>) -> Self {
        Self {
            address,
            record_type: RecordType::Data,
            data,
        }
    }

    /// Extended linear address record carrying the upper 16 bits of `base`.
    pub fn extended_linear(base: u32) -> Self {
        Self {
            address: 0,
            record_type: RecordType::ExtendedLinearAddress,
            data: ((base >> 16) as u16).to_be_bytes().to_vec(),
        }
    }

    pub fn end_of_file() -> Self {
        Self {
            address: 0,
            record_type: RecordType::EndOfFile,
            data: Vec::new(),
        }
    }

    pub fn address(&self) -> u16 {
        self.address
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn byte_count(&self) -> u8 {
        self.data.len() as u8
    }

    /// Two's complement of the byte sum of everything before the checksum field.
    pub fn checksum(&self) -> u8 {
        let addr_bytes = self.address.to_be_bytes();

        let mut checksum: u8 = 0;
        checksum = checksum.wrapping_add(self.byte_count());
        checksum = checksum.wrapping_add(addr_bytes[0]);
        checksum = checksum.wrapping_add(addr_bytes[1]);
        checksum = checksum.wrapping_add(self.record_type as u8);
        for &b in &self.data {
            checksum = checksum.wrapping_add(b);
        }
        (!checksum).wrapping_add(1)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            ":{:02X}{:04X}{:02X}",
            self.byte_count(),
            self.address,
            self.record_type as u8
        )?;
        for b in &self.data {
            write!(f, "{b:02X}")?;
        }
        write!(f, "{:02X}", self.checksum())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntelHexWriteOptions {
    /// Maximum data bytes per record: 16 or 32.
    pub columns: u8,
    /// Emit the big-endian 32-bit input length ahead of the payload.
    pub prepend_size: bool,
}

impl Default for IntelHexWriteOptions {
    fn default() -> Self {
        Self {
            columns: 16,
            prepend_size: false,
        }
    }
}

impl IntelHexWriteOptions {
    pub fn validate(&self) -> Result<(), EncodeError> {
        match self.columns {
            16 | 32 => Ok(()),
            other => Err(EncodeError::InvalidColumns(other)),
        }
    }
}

/// Encode a segment as an ordered list of Intel HEX records.
///
/// The output always opens with an extended linear address record for the
/// 64KiB window holding `start_address` and closes with the end-of-file record.
/// A new extended linear address record is emitted every time the running
/// address reaches the next window; the data record in progress is cut short there.
pub fn encode_intel_hex(
    segment: &Segment,
    options: &IntelHexWriteOptions,
) -> Result<Vec<Record>, EncodeError> {
    options.validate()?;

    let prefix: Vec<u8> = if options.prepend_size {
        check_fits(segment, SIZE_PREFIX_LEN)?;
        (segment.len() as u32).to_be_bytes().to_vec()
    } else {
        check_fits(segment, 0)?;
        Vec::new()
    };

    let columns = options.columns as usize;
    let base = segment.start_address as u64;
    let mut window = segment.window_base() as u64;

    let mut records = vec![Record::extended_linear(window as u32)];
    let mut current = Record::unchecked_data(segment.window_offset(), Vec::with_capacity(columns));

    for (position, &byte) in prefix.iter().chain(segment.data.iter()).enumerate() {
        let address = base + position as u64;

        if address - window == WINDOW_SIZE {
            window = address;
            tracing::trace!("crossing into window {:#010X}", window);
            start_record(&mut records, &mut current, 0, columns);
            records.push(Record::extended_linear(window as u32));
        }

        if current.data.len() == columns {
            start_record(&mut records, &mut current, (address - window) as u16, columns);
        }

        current.data.push(byte);
    }

    if !current.data.is_empty() {
        records.push(current);
    }
    records.push(Record::end_of_file());

    tracing::debug!(
        records = records.len(),
        bytes = segment.len(),
        "encoded {:#010X} as Intel HEX",
        segment.start_address
    );

    Ok(records)
}

/// Render a segment as a complete Intel HEX file, one `\n`-terminated line per record.
pub fn write_intel_hex(
    segment: &Segment,
    options: &IntelHexWriteOptions,
) -> Result<Vec<u8>, EncodeError> {
    let records = encode_intel_hex(segment, options)?;
    let mut output = Vec::with_capacity(records.len() * (11 + 2 * options.columns as usize + 1));
    for record in &records {
        output.extend_from_slice(record.to_string().as_bytes());
        output.push(b'\n');
    }
    Ok(output)
}

/// Flush `current` if it holds data and replace it with an empty record at `address`.
fn start_record(records: &mut Vec<Record>, current: &mut Record, address: u16, columns: usize) {
    let next = Record::unchecked_data(address, Vec::with_capacity(columns));
    let finished = std::mem::replace(current, next);
    if !finished.data.is_empty() {
        records.push(finished);
    }
}
