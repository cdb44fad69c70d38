use crate::protocol::avtp::bits::{self, BitRange};

// ===== BitRange =====

#[test]
fn test_max_value() {
    assert_eq!(BitRange::new(1, 0).max_value(), 1);
    assert_eq!(BitRange::new(8, 8).max_value(), 0xFF);
    assert_eq!(BitRange::new(16, 48).max_value(), 0xFFFF);
    assert_eq!(BitRange::new(64, 0).max_value(), u64::MAX);
}

#[test]
fn test_fits() {
    let range = BitRange::new(8, 8);
    assert!(range.fits(0));
    assert!(range.fits(255));
    assert!(!range.fits(256));
}

#[test]
fn test_masks() {
    assert_eq!(BitRange::new(1, 23).mask_u32(), 0x0080_0000);
    assert_eq!(BitRange::new(8, 8).mask_u32(), 0x0000_FF00);
    assert_eq!(BitRange::new(16, 32).mask_u64(), 0x0000_FFFF_0000_0000);
    assert_eq!(BitRange::new(16, 48).mask_u64(), 0xFFFF_0000_0000_0000);
    assert_eq!(BitRange::new(64, 0).mask_u64(), u64::MAX);
}

#[test]
fn test_insert_keeps_other_bits() {
    let range = BitRange::new(8, 8);
    let word = range.insert_u32(0xFFFF_FFFF, 0x12);
    assert_eq!(word, 0xFFFF_12FF);
    assert_eq!(range.extract_u32(word), 0x12);
}

#[test]
fn test_insert_truncates_to_width() {
    let range = BitRange::new(4, 4);
    assert_eq!(range.insert_u64(0, 0x1F), 0xF0);
}

// ===== Network-order words =====

#[test]
fn test_get_u32_reads_big_endian() {
    let word = [0x12, 0x34, 0x56, 0x78];
    assert_eq!(bits::get_u32(&word, BitRange::new(8, 24)), 0x12);
    assert_eq!(bits::get_u32(&word, BitRange::new(8, 0)), 0x78);
}

#[test]
fn test_set_u32_writes_big_endian() {
    let mut word = [0u8; 4];
    bits::set_u32(&mut word, BitRange::new(1, 23), 1);
    assert_eq!(word, [0x00, 0x80, 0x00, 0x00]);

    bits::set_u32(&mut word, BitRange::new(8, 8), 0xAB);
    assert_eq!(word, [0x00, 0x80, 0xAB, 0x00]);
}

#[test]
fn test_set_u64_writes_big_endian() {
    let mut word = [0u8; 8];
    bits::set_u64(&mut word, BitRange::new(16, 48), 0xBEEF);
    bits::set_u64(&mut word, BitRange::new(16, 0), 0x0102);
    assert_eq!(word, [0xBE, 0xEF, 0, 0, 0, 0, 0x01, 0x02]);
    assert_eq!(bits::get_u64(&word, BitRange::new(16, 48)), 0xBEEF);
}

#[test]
fn test_set_clears_previous_value() {
    let mut word = [0xFFu8; 8];
    bits::set_u64(&mut word, BitRange::new(8, 24), 0);
    assert_eq!(word, [0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0xFF, 0xFF, 0xFF]);
}
