//! Bit-serial CRC-8 over the generator x^8 + x^2 + x + 1.

/// Feedback taps for x^2 + x + 1; the x^8 term is the bit shifted out.
const POLY: u8 = 0x07;

/// CRC-8 of `value` fed most-significant bit first.
///
/// The register starts at zero and only the minimal binary representation of
/// `value` is consumed. Leading zero bits leave a zero register unchanged, so
/// this equals the CRC-8/SMBUS of `value` at any big-endian byte width.
pub fn crc8(value: u64) -> u8 {
    let bits = u64::BITS - value.leading_zeros();
    let mut register: u8 = 0;
    for i in (0..bits).rev() {
        let bit = ((value >> i) & 1) as u8;
        let feedback = bit ^ (register >> 7);
        register <<= 1;
        if feedback != 0 {
            register ^= POLY;
        }
    }
    register
}
