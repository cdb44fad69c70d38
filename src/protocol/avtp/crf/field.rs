//! CRF field identifiers and their wire locations.
//!
//! Each [`CrfField`] resolves to a static [`FieldDescriptor`] naming the header
//! word that holds it, the bit range inside that word, and how values are
//! translated between the accessor API and the wire.

use std::str::FromStr;

use crate::error::{AvtpError, AvtpResult};

use super::super::bits::BitRange;
use super::base_freq;
use super::types::CrfPull;

/// Stream-ID-valid flag
pub const SV: BitRange = BitRange::new(1, 23);
/// MCLK reset flag
pub const MR: BitRange = BitRange::new(1, 19);
/// Frame sync flag
pub const FS: BitRange = BitRange::new(1, 17);
/// Timestamp-valid flag
pub const TV: BitRange = BitRange::new(1, 16);
/// Timestamp-uncertain flag
pub const TU: BitRange = BitRange::new(1, 0);
/// Sequence number
pub const SEQ_NUM: BitRange = BitRange::new(8, 8);
/// CRF stream type
pub const TYPE: BitRange = BitRange::new(16, 32);
/// Base frequency wire code
pub const BASE_FREQ: BitRange = BitRange::new(8, 24);
/// Timestamp payload length in bytes
pub const CRF_DATA_LEN: BitRange = BitRange::new(16, 48);
/// Timestamp interval
pub const TIMESTAMP_INTERVAL: BitRange = BitRange::new(16, 0);
/// Whole stream ID word
pub const STREAM_ID: BitRange = BitRange::new(64, 0);

/// Logical CRF header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrfField {
    /// Stream-ID-valid flag
    Sv,
    /// MCLK reset flag
    Mr,
    /// Frame sync flag
    Fs,
    /// Timestamp-valid flag (write only)
    Tv,
    /// Timestamp-uncertain flag
    Tu,
    /// Sequence number
    SeqNum,
    /// CRF stream type
    Type,
    /// Base frequency in Hz
    BaseFreq,
    /// Timestamp payload length in bytes
    CrfDataLen,
    /// Timestamp interval
    TimestampInterval,
    /// Stream identifier
    StreamId,
    /// Base frequency multiplier
    Pull,
}

/// Header word holding a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// First 32-bit word, shared with the common header subtype
    SubtypeData(BitRange),
    /// 64-bit stream identifier
    StreamId(BitRange),
    /// 64-bit packet info word
    PacketInfo(BitRange),
    /// Not stored on the wire
    Virtual,
}

impl Location {
    /// Bit range inside the containing word, if the field is stored.
    #[must_use]
    pub fn range(self) -> Option<BitRange> {
        match self {
            Self::SubtypeData(range) | Self::StreamId(range) | Self::PacketInfo(range) => {
                Some(range)
            }
            Self::Virtual => None,
        }
    }
}

/// Conversion between API values and stored bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translator {
    /// Stored as-is
    Raw,
    /// Hz on the API side, table index on the wire
    BaseFrequency,
    /// Constant multiply-by-1; nothing is stored
    Pull,
}

/// Static description of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Canonical field name
    pub name: &'static str,
    /// Where the field lives
    pub location: Location,
    /// How values are translated
    pub translator: Translator,
    /// Whether the field has a getter
    pub readable: bool,
}

impl FieldDescriptor {
    const fn raw(name: &'static str, location: Location) -> Self {
        Self {
            name,
            location,
            translator: Translator::Raw,
            readable: true,
        }
    }

    /// Turn an API value into the bits to store.
    ///
    /// Returns `None` for virtual fields that accepted the value but store
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if the value cannot be stored in this field.
    pub fn encode(&self, value: u64) -> AvtpResult<Option<u64>> {
        match self.translator {
            Translator::Raw => match self.location.range() {
                Some(range) if !range.fits(value) => Err(AvtpError::InvalidValue {
                    field: self.name,
                    value,
                    reason: "value exceeds field width",
                }),
                _ => Ok(Some(value)),
            },
            Translator::BaseFrequency => base_freq::encode(value).map(|code| Some(code.into())),
            Translator::Pull => {
                if value == CrfPull::MultiplyBy1.code() {
                    Ok(None)
                } else {
                    Err(AvtpError::InvalidValue {
                        field: self.name,
                        value,
                        reason: "only the multiply-by-1 pull is supported",
                    })
                }
            }
        }
    }

    /// Turn stored bits into the API value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if the stored bits have no API meaning.
    pub fn decode(&self, stored: u64) -> AvtpResult<u64> {
        match self.translator {
            Translator::Raw => Ok(stored),
            Translator::BaseFrequency => base_freq::decode(stored).map(u64::from),
            Translator::Pull => Ok(CrfPull::MultiplyBy1.code()),
        }
    }
}

const SV_FIELD: FieldDescriptor = FieldDescriptor::raw("SV", Location::SubtypeData(SV));
const MR_FIELD: FieldDescriptor = FieldDescriptor::raw("MR", Location::SubtypeData(MR));
const FS_FIELD: FieldDescriptor = FieldDescriptor::raw("FS", Location::SubtypeData(FS));
// No getter for TV; the field set this codec follows defines none.
const TV_FIELD: FieldDescriptor = FieldDescriptor {
    readable: false,
    ..FieldDescriptor::raw("TV", Location::SubtypeData(TV))
};
const TU_FIELD: FieldDescriptor = FieldDescriptor::raw("TU", Location::SubtypeData(TU));
const SEQ_NUM_FIELD: FieldDescriptor =
    FieldDescriptor::raw("SEQ_NUM", Location::SubtypeData(SEQ_NUM));
const TYPE_FIELD: FieldDescriptor = FieldDescriptor::raw("TYPE", Location::PacketInfo(TYPE));
const BASE_FREQ_FIELD: FieldDescriptor = FieldDescriptor {
    translator: Translator::BaseFrequency,
    ..FieldDescriptor::raw("BASE_FREQ", Location::PacketInfo(BASE_FREQ))
};
const CRF_DATA_LEN_FIELD: FieldDescriptor =
    FieldDescriptor::raw("CRF_DATA_LEN", Location::PacketInfo(CRF_DATA_LEN));
const TIMESTAMP_INTERVAL_FIELD: FieldDescriptor =
    FieldDescriptor::raw("TIMESTAMP_INTERVAL", Location::PacketInfo(TIMESTAMP_INTERVAL));
const STREAM_ID_FIELD: FieldDescriptor =
    FieldDescriptor::raw("STREAM_ID", Location::StreamId(STREAM_ID));
const PULL_FIELD: FieldDescriptor = FieldDescriptor {
    translator: Translator::Pull,
    ..FieldDescriptor::raw("PULL", Location::Virtual)
};

impl CrfField {
    /// Every field, in header order.
    pub const ALL: [Self; 12] = [
        Self::Sv,
        Self::Mr,
        Self::Fs,
        Self::Tv,
        Self::Tu,
        Self::SeqNum,
        Self::Type,
        Self::BaseFreq,
        Self::CrfDataLen,
        Self::TimestampInterval,
        Self::StreamId,
        Self::Pull,
    ];

    /// Location and translation rules for this field.
    #[must_use]
    pub const fn descriptor(self) -> &'static FieldDescriptor {
        match self {
            Self::Sv => &SV_FIELD,
            Self::Mr => &MR_FIELD,
            Self::Fs => &FS_FIELD,
            Self::Tv => &TV_FIELD,
            Self::Tu => &TU_FIELD,
            Self::SeqNum => &SEQ_NUM_FIELD,
            Self::Type => &TYPE_FIELD,
            Self::BaseFreq => &BASE_FREQ_FIELD,
            Self::CrfDataLen => &CRF_DATA_LEN_FIELD,
            Self::TimestampInterval => &TIMESTAMP_INTERVAL_FIELD,
            Self::StreamId => &STREAM_ID_FIELD,
            Self::Pull => &PULL_FIELD,
        }
    }

    /// Canonical field name, e.g. `SEQ_NUM`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.descriptor().name
    }
}

impl std::fmt::Display for CrfField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CrfField {
    type Err = AvtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| AvtpError::invalid_argument(format!("unknown CRF field {s:?}")))
    }
}
