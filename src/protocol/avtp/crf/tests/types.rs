use crate::protocol::avtp::crf::{CRF_PULL_MULT_BY_1, CrfPull, CrfType};

#[test]
fn test_crf_type_codes() {
    assert_eq!(CrfType::from_code(0).unwrap(), CrfType::User);
    assert_eq!(CrfType::from_code(1).unwrap(), CrfType::AudioSample);
    assert_eq!(CrfType::from_code(2).unwrap(), CrfType::VideoFrame);
    assert_eq!(CrfType::from_code(3).unwrap(), CrfType::VideoLine);
    assert_eq!(CrfType::from_code(4).unwrap(), CrfType::MachineCycle);
    assert_eq!(CrfType::MachineCycle.code(), 4);
}

#[test]
fn test_crf_type_reserved() {
    assert!(CrfType::from_code(5).unwrap_err().is_invalid_argument());
    assert!(CrfType::from_code(0xFFFF).is_err());
}

#[test]
fn test_pull_codes() {
    assert_eq!(CrfPull::MultiplyBy1.code(), CRF_PULL_MULT_BY_1);
    assert_eq!(CrfPull::from_code(5).unwrap(), CrfPull::MultiplyBy1Over8);
    assert!(CrfPull::from_code(6).unwrap_err().is_invalid_value());
    assert_eq!(CrfPull::default(), CrfPull::MultiplyBy1);
}

#[test]
fn test_pull_apply() {
    assert!((CrfPull::MultiplyBy1.apply(48000) - 48000.0).abs() < f64::EPSILON);
    assert!((CrfPull::MultiplyBy1Over8.apply(48000) - 6000.0).abs() < f64::EPSILON);
    assert!((CrfPull::MultiplyBy24Over25.apply(25000) - 24000.0).abs() < 1e-9);
    assert!((CrfPull::MultiplyBy1Over1001.apply(48048) - 48000.0).abs() < 1e-6);
}
