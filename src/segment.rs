/// A contiguous run of bytes placed at a load address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub start_address: u32,
    pub data: Vec<u8>,
}

impl Segment {
    pub fn new(start_address: u32, data: Vec<u8>) -> Self {
        debug_assert!(
            data.len() <= u32::MAX as usize,
            "segment data exceeds u32::MAX bytes"
        );
        Self {
            start_address,
            data,
        }
    }

    /// Last occupied address, or `None` if the data would run past `u32::MAX`.
    pub fn end_address(&self) -> Option<u32> {
        self.end_address_with_prefix(0)
    }

    /// Last occupied address once `prefix_len` extra bytes are placed ahead of the data.
    pub fn end_address_with_prefix(&self, prefix_len: usize) -> Option<u32> {
        let total = self.data.len().checked_add(prefix_len)?;
        if total == 0 {
            return Some(self.start_address);
        }
        let total = u32::try_from(total).ok()?;
        self.start_address.checked_add(total - 1)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Base of the 64KiB window holding `start_address`.
    pub fn window_base(&self) -> u32 {
        self.start_address & !0xFFFF
    }

    /// Offset of `start_address` inside its 64KiB window.
    pub fn window_offset(&self) -> u16 {
        (self.start_address & 0xFFFF) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_address() {
        let seg = Segment::new(0x1000, vec![0xAA, 0xBB, 0xCC]);
        assert_eq!(seg.end_address(), Some(0x1002));
    }

    #[test]
    fn test_end_address_overflow() {
        let seg = Segment::new(u32::MAX, vec![0xAA, 0xBB]);
        assert_eq!(seg.end_address(), None);
    }

    #[test]
    fn test_end_address_with_prefix() {
        let seg = Segment::new(0xFFFF_FFF0, vec![0x00; 12]);
        assert_eq!(seg.end_address_with_prefix(4), Some(u32::MAX));
        assert_eq!(seg.end_address_with_prefix(5), None);
        assert_eq!(Segment::new(7, vec![]).end_address_with_prefix(0), Some(7));
    }

    #[test]
    fn test_window_split() {
        let seg = Segment::new(0x8080_1234, vec![]);
        assert_eq!(seg.window_base(), 0x8080_0000);
        assert_eq!(seg.window_offset(), 0x1234);
    }
}
