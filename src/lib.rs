//! # avtp-crf
//!
//! IEEE 1722 (AVTP) Clock Reference Format header codec.
//!
//! CRF streams distribute a media clock across an Audio/Video Bridging
//! network as a series of timestamps. This crate reads and writes the
//! fixed CRF header: flags, sequence number, stream id, stream type, base
//! frequency, payload length and timestamp interval, each packed at its
//! bit position in network byte order.
//!
//! ## Example
//!
//! ```rust
//! use avtp_crf::protocol::avtp::crf::{CrfField, CrfPdu};
//!
//! # fn example() -> Result<(), avtp_crf::AvtpError> {
//! let mut pdu = CrfPdu::new()?;
//! pdu.set(CrfField::StreamId, 0x001B_21FF_FE00_0001)?;
//! pdu.set(CrfField::BaseFreq, 48_000)?;
//! pdu.set(CrfField::TimestampInterval, 160)?;
//! pdu.set(CrfField::CrfDataLen, 48)?;
//!
//! let wire = pdu.encode();
//! let received = CrfPdu::decode(&wire)?;
//! assert_eq!(received.get(CrfField::BaseFreq)?, 48_000);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Error types
pub mod error;
/// Protocol codecs
pub mod protocol;

pub use error::{AvtpError, AvtpResult};
pub use protocol::avtp::{AvtpCommonPdu, AvtpSubtype};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
