use crate::Segment;
use crate::io::EncodeError;

/// Place a raw binary blob at the given base address.
///
/// Fails if the last byte would land past `u32::MAX`.
pub fn parse_binary(data: &[u8], base_address: u32) -> Result<Segment, EncodeError> {
    let segment = Segment::new(base_address, data.to_vec());
    check_fits(&segment, 0)?;
    Ok(segment)
}

/// Check that `segment` plus `extra` leading bytes still fits in 32-bit address space.
pub(super) fn check_fits(segment: &Segment, extra: usize) -> Result<(), EncodeError> {
    match segment.end_address_with_prefix(extra) {
        Some(_) => Ok(()),
        None => Err(EncodeError::AddressOverflow {
            base_address: segment.start_address,
            len: segment.len().saturating_add(extra),
        }),
    }
}
