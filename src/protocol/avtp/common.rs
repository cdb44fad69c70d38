//! AVTP common header (IEEE 1722-2016 Section 4.4.3).
//!
//! Only the subtype tag is handled here. It is the top byte of the first
//! 32-bit word shared by every AVTP PDU; subtype-specific codecs own the
//! remaining bits of that word.

use crate::error::{AvtpError, AvtpResult};

use super::bits::{self, BitRange};

/// Location of the subtype tag in the first header word.
pub const SUBTYPE: BitRange = BitRange::new(8, 24);

/// AVTP subtype codes (IEEE 1722-2016 Table 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AvtpSubtype {
    /// IEC 61883/IIDC format
    Iec61883Iidc = 0x00,
    /// MMA streams
    MmaStream = 0x01,
    /// AVTP audio format
    Aaf = 0x02,
    /// Compressed video format
    Cvf = 0x03,
    /// Clock reference format
    Crf = 0x04,
    /// Time-synchronous control format
    Tscf = 0x05,
    /// SDI video format
    Svf = 0x06,
    /// Raw video format
    Rvf = 0x07,
    /// AES encrypted format, continuous
    AefContinuous = 0x6E,
    /// Vendor specific format stream
    VsfStream = 0x6F,
    /// Experimental format stream
    EfStream = 0x7F,
    /// Non-time-synchronous control format
    Ntscf = 0x82,
    /// ECC signed control format
    Escf = 0xEC,
    /// ECC encrypted control format
    Eecf = 0xED,
    /// AES encrypted format, discrete
    AefDiscrete = 0xEE,
    /// AVDECC discovery protocol
    Adp = 0xFA,
    /// AVDECC enumeration and control protocol
    Aecp = 0xFB,
    /// AVDECC connection management protocol
    Acmp = 0xFC,
    /// MAAP protocol
    Maap = 0xFE,
    /// Experimental format control
    EfControl = 0xFF,
}

impl AvtpSubtype {
    /// Parse a wire subtype code.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for codes reserved by the standard.
    pub fn from_code(code: u8) -> AvtpResult<Self> {
        match code {
            0x00 => Ok(Self::Iec61883Iidc),
            0x01 => Ok(Self::MmaStream),
            0x02 => Ok(Self::Aaf),
            0x03 => Ok(Self::Cvf),
            0x04 => Ok(Self::Crf),
            0x05 => Ok(Self::Tscf),
            0x06 => Ok(Self::Svf),
            0x07 => Ok(Self::Rvf),
            0x6E => Ok(Self::AefContinuous),
            0x6F => Ok(Self::VsfStream),
            0x7F => Ok(Self::EfStream),
            0x82 => Ok(Self::Ntscf),
            0xEC => Ok(Self::Escf),
            0xED => Ok(Self::Eecf),
            0xEE => Ok(Self::AefDiscrete),
            0xFA => Ok(Self::Adp),
            0xFB => Ok(Self::Aecp),
            0xFC => Ok(Self::Acmp),
            0xFE => Ok(Self::Maap),
            0xFF => Ok(Self::EfControl),
            other => Err(AvtpError::invalid_argument(format!(
                "reserved AVTP subtype 0x{other:02x}"
            ))),
        }
    }

    /// Wire code of this subtype.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for AvtpSubtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Iec61883Iidc => "61883/IIDC",
            Self::MmaStream => "MMA",
            Self::Aaf => "AAF",
            Self::Cvf => "CVF",
            Self::Crf => "CRF",
            Self::Tscf => "TSCF",
            Self::Svf => "SVF",
            Self::Rvf => "RVF",
            Self::AefContinuous => "AEF continuous",
            Self::VsfStream => "VSF",
            Self::EfStream => "EF stream",
            Self::Ntscf => "NTSCF",
            Self::Escf => "ESCF",
            Self::Eecf => "EECF",
            Self::AefDiscrete => "AEF discrete",
            Self::Adp => "ADP",
            Self::Aecp => "AECP",
            Self::Acmp => "ACMP",
            Self::Maap => "MAAP",
            Self::EfControl => "EF control",
        };
        write!(f, "{name}")
    }
}

/// Access to the common header word of an AVTP PDU.
///
/// Subtype codecs implement the two word accessors and get the subtype
/// tag handling for free.
pub trait AvtpCommonPdu {
    /// First 32-bit header word, network byte order.
    fn subtype_data(&self) -> &[u8; 4];

    /// Mutable first 32-bit header word, network byte order.
    fn subtype_data_mut(&mut self) -> &mut [u8; 4];

    /// Raw subtype code stored in the header.
    fn subtype_code(&self) -> u8 {
        // An 8-bit range always fits in u8.
        bits::get_u32(self.subtype_data(), SUBTYPE) as u8
    }

    /// Decoded subtype tag.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the stored code is reserved.
    fn subtype(&self) -> AvtpResult<AvtpSubtype> {
        AvtpSubtype::from_code(self.subtype_code())
    }

    /// Store the subtype tag, leaving the rest of the word untouched.
    ///
    /// # Errors
    ///
    /// Implementations with restricted subtypes may refuse the write.
    fn set_subtype(&mut self, subtype: AvtpSubtype) -> AvtpResult<()> {
        bits::set_u32(self.subtype_data_mut(), SUBTYPE, u32::from(subtype.code()));
        Ok(())
    }
}
