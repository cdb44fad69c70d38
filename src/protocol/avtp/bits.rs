//! Masked bit-field access on big-endian header words.
//!
//! AVTP headers pack their fields into 32-bit and 64-bit words that travel in
//! network byte order. Every accessor here converts the word to host order,
//! works on the masked range only, and (for writes) converts back before
//! storing, so bits outside the range are never touched.

use byteorder::{BigEndian, ByteOrder};

/// A contiguous run of `width` bits, `shift` bits above the word's LSB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitRange {
    /// Number of bits in the field
    pub width: u32,
    /// Distance of the field's lowest bit from bit 0 of the word
    pub shift: u32,
}

impl BitRange {
    /// Create a range of `width` bits starting `shift` bits above bit 0.
    #[must_use]
    pub const fn new(width: u32, shift: u32) -> Self {
        Self { width, shift }
    }

    /// Largest value the field can hold.
    #[must_use]
    pub const fn max_value(&self) -> u64 {
        if self.width >= 64 {
            u64::MAX
        } else {
            (1u64 << self.width) - 1
        }
    }

    /// Whether `value` fits in the field without truncation.
    #[must_use]
    pub const fn fits(&self, value: u64) -> bool {
        value <= self.max_value()
    }

    /// In-place mask for a 32-bit container word.
    #[must_use]
    pub const fn mask_u32(&self) -> u32 {
        (self.max_value() as u32) << self.shift
    }

    /// In-place mask for a 64-bit container word.
    #[must_use]
    pub const fn mask_u64(&self) -> u64 {
        self.max_value() << self.shift
    }

    /// Extract the field from a host-order 32-bit word.
    #[must_use]
    pub const fn extract_u32(&self, word: u32) -> u32 {
        (word & self.mask_u32()) >> self.shift
    }

    /// Extract the field from a host-order 64-bit word.
    #[must_use]
    pub const fn extract_u64(&self, word: u64) -> u64 {
        (word & self.mask_u64()) >> self.shift
    }

    /// Replace the field inside a host-order 32-bit word.
    #[must_use]
    pub const fn insert_u32(&self, word: u32, value: u32) -> u32 {
        let mask = self.mask_u32();
        (word & !mask) | ((value << self.shift) & mask)
    }

    /// Replace the field inside a host-order 64-bit word.
    #[must_use]
    pub const fn insert_u64(&self, word: u64, value: u64) -> u64 {
        let mask = self.mask_u64();
        (word & !mask) | ((value << self.shift) & mask)
    }
}

/// Read a field from a 4-byte network-order word.
#[must_use]
pub fn get_u32(word: &[u8; 4], range: BitRange) -> u32 {
    range.extract_u32(BigEndian::read_u32(word))
}

/// Read a field from an 8-byte network-order word.
#[must_use]
pub fn get_u64(word: &[u8; 8], range: BitRange) -> u64 {
    range.extract_u64(BigEndian::read_u64(word))
}

/// Write a field into a 4-byte network-order word.
///
/// Bits of `value` above the field width are dropped; callers validate with
/// [`BitRange::fits`] first when truncation must be reported.
pub fn set_u32(word: &mut [u8; 4], range: BitRange, value: u32) {
    let host = range.insert_u32(BigEndian::read_u32(word), value);
    BigEndian::write_u32(word, host);
}

/// Write a field into an 8-byte network-order word.
///
/// Same truncation rule as [`set_u32`].
pub fn set_u64(word: &mut [u8; 8], range: BitRange, value: u64) {
    let host = range.insert_u64(BigEndian::read_u64(word), value);
    BigEndian::write_u64(word, host);
}
