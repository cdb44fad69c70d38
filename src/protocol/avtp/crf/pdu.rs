//! CRF PDU header record and its field accessors.

use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;

use crate::error::{AvtpError, AvtpResult};

use super::super::bits;
use super::super::common::{AvtpCommonPdu, AvtpSubtype};
use super::config::CrfStreamConfig;
use super::field::{CrfField, Location};
use super::types::CrfType;

/// Fixed CRF header (IEEE 1722-2016 Section 10.4).
///
/// The timestamp payload that follows on the wire is not part of this
/// record; `CRF_DATA_LEN` only records its size.
///
/// ```text
///  0..4   subtype_data  subtype | sv | version | mr | fs | tv | seq_num | tu
///  4..12  stream_id
/// 12..20  packet_info   crf_data_len | type | base_freq | timestamp_interval
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CrfPdu {
    subtype_data: [u8; 4],
    stream_id: [u8; 8],
    packet_info: [u8; 8],
}

impl CrfPdu {
    /// Header size in bytes.
    pub const SIZE: usize = 20;

    /// Create an initialised header (see [`CrfPdu::init`]).
    ///
    /// # Errors
    ///
    /// Propagates any error from [`CrfPdu::init`].
    pub fn new() -> AvtpResult<Self> {
        let mut pdu = Self::default();
        pdu.init()?;
        Ok(pdu)
    }

    /// Create an initialised header populated from a stream configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if the configuration holds a value the header
    /// cannot carry.
    pub fn from_config(config: &CrfStreamConfig) -> AvtpResult<Self> {
        config.validate()?;
        let mut pdu = Self::new()?;
        pdu.set(CrfField::StreamId, config.stream_id)?;
        pdu.set(CrfField::Type, config.stream_type.code().into())?;
        pdu.set(CrfField::BaseFreq, config.base_frequency.into())?;
        pdu.set(CrfField::TimestampInterval, config.timestamp_interval.into())?;
        pdu.set(CrfField::CrfDataLen, config.crf_data_len()?.into())?;
        pdu.set(CrfField::Fs, config.frame_sync.into())?;
        pdu.set(CrfField::Tu, config.timestamp_uncertain.into())?;
        Ok(pdu)
    }

    /// Zero the header and install the CRF defaults: subtype = CRF, SV = 1,
    /// TV = 1.
    ///
    /// # Errors
    ///
    /// Returns the first error from the subtype or flag writes.
    pub fn init(&mut self) -> AvtpResult<()> {
        *self = Self::default();
        self.set_subtype(AvtpSubtype::Crf)?;
        self.set(CrfField::Sv, 1)?;
        // Timestamps are normally valid.
        self.set(CrfField::Tv, 1)?;
        tracing::trace!("initialised CRF header");
        Ok(())
    }

    /// Read a field.
    ///
    /// `BASE_FREQ` is returned in Hz and `PULL` always reads as the
    /// multiply-by-1 code.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for `TV`, which has no getter, and
    /// `InvalidValue` if a stored `BASE_FREQ` code is outside the table.
    pub fn get(&self, field: CrfField) -> AvtpResult<u64> {
        let descriptor = field.descriptor();
        if !descriptor.readable {
            return Err(AvtpError::invalid_argument(format!(
                "CRF field {field} has no getter"
            )));
        }

        let stored = match descriptor.location {
            Location::SubtypeData(range) => u64::from(bits::get_u32(&self.subtype_data, range)),
            Location::StreamId(range) => bits::get_u64(&self.stream_id, range),
            Location::PacketInfo(range) => bits::get_u64(&self.packet_info, range),
            Location::Virtual => 0,
        };

        descriptor.decode(stored)
    }

    /// Write a field.
    ///
    /// `BASE_FREQ` takes a rate in Hz. `PULL` only accepts the multiply-by-1
    /// code and stores nothing.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if `value` does not fit the field, is not a
    /// known base frequency, or is an unsupported pull. The header is left
    /// unchanged on error.
    pub fn set(&mut self, field: CrfField, value: u64) -> AvtpResult<()> {
        let descriptor = field.descriptor();
        let stored = match descriptor.encode(value) {
            Ok(Some(stored)) => stored,
            Ok(None) => return Ok(()),
            Err(err) => {
                tracing::debug!(%field, value, "rejected CRF field write: {err}");
                return Err(err);
            }
        };

        match descriptor.location {
            Location::SubtypeData(range) => {
                let stored = u32::try_from(stored).map_err(|_| AvtpError::InvalidValue {
                    field: descriptor.name,
                    value,
                    reason: "value exceeds field width",
                })?;
                bits::set_u32(&mut self.subtype_data, range, stored);
            }
            Location::StreamId(range) => bits::set_u64(&mut self.stream_id, range, stored),
            Location::PacketInfo(range) => bits::set_u64(&mut self.packet_info, range, stored),
            Location::Virtual => {}
        }
        Ok(())
    }

    /// Stream identifier.
    #[must_use]
    pub fn stream_id(&self) -> u64 {
        BigEndian::read_u64(&self.stream_id)
    }

    /// Decoded stream type.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for reserved type codes.
    pub fn stream_type(&self) -> AvtpResult<CrfType> {
        CrfType::from_code(self.get(CrfField::Type)?)
    }

    /// Base frequency in Hz.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if the stored code is outside the table.
    pub fn base_frequency(&self) -> AvtpResult<u32> {
        super::base_freq::decode(bits::get_u64(&self.packet_info, super::field::BASE_FREQ))
    }

    /// Current sequence number.
    #[must_use]
    pub fn sequence_number(&self) -> u8 {
        // SEQ_NUM is 8 bits wide.
        bits::get_u32(&self.subtype_data, super::field::SEQ_NUM) as u8
    }

    /// Advance the sequence number, wrapping from 255 to 0, and return the
    /// new value.
    pub fn next_sequence_number(&mut self) -> u8 {
        let next = self.sequence_number().wrapping_add(1);
        bits::set_u32(&mut self.subtype_data, super::field::SEQ_NUM, next.into());
        next
    }

    /// Encode header to bytes.
    #[must_use]
    pub fn encode(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[0..4].copy_from_slice(&self.subtype_data);
        buf[4..12].copy_from_slice(&self.stream_id);
        buf[12..20].copy_from_slice(&self.packet_info);
        buf
    }

    /// Encode header into a shareable buffer.
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(&self.encode())
    }

    /// Decode a header from the start of `buf`.
    ///
    /// No field is validated; bytes after the header are ignored.
    ///
    /// # Errors
    ///
    /// Returns `BufferTooSmall` if `buf` is shorter than [`CrfPdu::SIZE`].
    pub fn decode(buf: &[u8]) -> AvtpResult<Self> {
        if buf.len() < Self::SIZE {
            return Err(AvtpError::BufferTooSmall {
                needed: Self::SIZE,
                have: buf.len(),
            });
        }

        let mut pdu = Self::default();
        pdu.subtype_data.copy_from_slice(&buf[0..4]);
        pdu.stream_id.copy_from_slice(&buf[4..12]);
        pdu.packet_info.copy_from_slice(&buf[12..20]);
        Ok(pdu)
    }
}

impl AvtpCommonPdu for CrfPdu {
    fn subtype_data(&self) -> &[u8; 4] {
        &self.subtype_data
    }

    fn subtype_data_mut(&mut self) -> &mut [u8; 4] {
        &mut self.subtype_data
    }
}

/// Read a field from `pdu`. See [`CrfPdu::get`].
///
/// # Errors
///
/// Same as [`CrfPdu::get`].
pub fn crf_pdu_get(pdu: &CrfPdu, field: CrfField) -> AvtpResult<u64> {
    pdu.get(field)
}

/// Write a field of `pdu`. See [`CrfPdu::set`].
///
/// # Errors
///
/// Same as [`CrfPdu::set`].
pub fn crf_pdu_set(pdu: &mut CrfPdu, field: CrfField, value: u64) -> AvtpResult<()> {
    pdu.set(field, value)
}

/// Reset `pdu` to the CRF defaults. See [`CrfPdu::init`].
///
/// # Errors
///
/// Same as [`CrfPdu::init`].
pub fn crf_pdu_init(pdu: &mut CrfPdu) -> AvtpResult<()> {
    pdu.init()
}
