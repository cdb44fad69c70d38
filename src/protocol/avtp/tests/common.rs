use crate::protocol::avtp::common::{AvtpCommonPdu, AvtpSubtype};

struct Word([u8; 4]);

impl AvtpCommonPdu for Word {
    fn subtype_data(&self) -> &[u8; 4] {
        &self.0
    }

    fn subtype_data_mut(&mut self) -> &mut [u8; 4] {
        &mut self.0
    }
}

#[test]
fn test_subtype_from_code() {
    assert_eq!(AvtpSubtype::from_code(0x04).unwrap(), AvtpSubtype::Crf);
    assert_eq!(AvtpSubtype::from_code(0x02).unwrap(), AvtpSubtype::Aaf);
    assert_eq!(AvtpSubtype::from_code(0xFE).unwrap(), AvtpSubtype::Maap);
}

#[test]
fn test_subtype_from_reserved_code() {
    let err = AvtpSubtype::from_code(0x08).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_subtype_code_roundtrip() {
    for code in 0..=u8::MAX {
        if let Ok(subtype) = AvtpSubtype::from_code(code) {
            assert_eq!(subtype.code(), code);
        }
    }
}

#[test]
fn test_subtype_display() {
    assert_eq!(AvtpSubtype::Crf.to_string(), "CRF");
    assert_eq!(AvtpSubtype::Iec61883Iidc.to_string(), "61883/IIDC");
}

#[test]
fn test_set_subtype_writes_top_byte() {
    let mut word = Word([0x00, 0xAA, 0xBB, 0xCC]);
    word.set_subtype(AvtpSubtype::Crf).unwrap();
    assert_eq!(word.0, [0x04, 0xAA, 0xBB, 0xCC]);
    assert_eq!(word.subtype_code(), 0x04);
    assert_eq!(word.subtype().unwrap(), AvtpSubtype::Crf);
}

#[test]
fn test_subtype_reserved_in_header() {
    let word = Word([0x10, 0, 0, 0]);
    assert_eq!(word.subtype_code(), 0x10);
    assert!(word.subtype().is_err());
}
