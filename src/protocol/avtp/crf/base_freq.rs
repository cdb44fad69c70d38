//! Base frequency wire codes.
//!
//! The CRF header carries the nominal sample rate as an 8-bit index into a
//! fixed table. The accessor API speaks Hz so callers never see the index.

use crate::error::{AvtpError, AvtpResult};

/// Sample rate in Hz for each wire code; the index is the code.
pub static BASE_FREQ_TABLE: [u32; 11] = [
    0, 8000, 11025, 16000, 22050, 32000, 44100, 48000, 64000, 88200, 96000,
];

/// Translate a stored wire code into Hz.
///
/// Code 0 maps to 0 Hz and is not an error.
///
/// # Errors
///
/// Returns `InvalidValue` if `code` is past the end of the table.
pub fn decode(code: u64) -> AvtpResult<u32> {
    usize::try_from(code)
        .ok()
        .and_then(|index| BASE_FREQ_TABLE.get(index))
        .copied()
        .ok_or_else(|| {
            tracing::debug!(code, "BASE_FREQ wire code outside frequency table");
            AvtpError::InvalidValue {
                field: "BASE_FREQ",
                value: code,
                reason: "wire code outside frequency table",
            }
        })
}

/// Translate a rate in Hz into its wire code.
///
/// # Errors
///
/// Returns `InvalidValue` if no table entry equals `hz` exactly.
pub fn encode(hz: u64) -> AvtpResult<u8> {
    BASE_FREQ_TABLE
        .iter()
        .position(|&rate| u64::from(rate) == hz)
        // The table has 11 entries, so every index fits in u8.
        .map(|index| index as u8)
        .ok_or(AvtpError::InvalidValue {
            field: "BASE_FREQ",
            value: hz,
            reason: "no matching frequency table entry",
        })
}
