//! Clock Reference Format (CRF) header codec (IEEE 1722-2016 Section 10).
//!
//! A CRF stream carries timestamps of a reference clock (audio sample,
//! video frame or line, machine cycle) so listeners can recover it. This
//! module encodes and decodes the fixed 20-byte header; the timestamp
//! payload behind it is left to the caller.
//!
//! ```text
//! let mut pdu = CrfPdu::new()?;            // subtype = CRF, SV = 1, TV = 1
//! pdu.set(CrfField::BaseFreq, 48_000)?;    // stored as wire code 7
//! pdu.set(CrfField::CrfDataLen, 48)?;      // six 8-byte timestamps follow
//! assert_eq!(pdu.get(CrfField::BaseFreq)?, 48_000);
//! ```

pub mod base_freq;
pub mod config;
pub mod field;
pub mod pdu;
pub mod types;

#[cfg(test)]
mod tests;

pub use config::{CrfStreamConfig, CrfStreamConfigBuilder};
pub use field::{CrfField, FieldDescriptor, Location, Translator};
pub use pdu::{CrfPdu, crf_pdu_get, crf_pdu_init, crf_pdu_set};
pub use types::{CrfPull, CrfType};

/// The only pull code the header codec accepts (multiply by 1.0).
pub const CRF_PULL_MULT_BY_1: u64 = 0;
