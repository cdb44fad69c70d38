//! Stream type and pull multiplier codes.

use serde::{Deserialize, Serialize};

use crate::error::{AvtpError, AvtpResult};

/// CRF stream type codes (IEEE 1722-2016 Table 26).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u16)]
pub enum CrfType {
    /// User specified
    #[default]
    User = 0,
    /// Audio sample timestamps
    AudioSample = 1,
    /// Video frame sync timestamps
    VideoFrame = 2,
    /// Video line sync timestamps
    VideoLine = 3,
    /// Machine cycle timestamps
    MachineCycle = 4,
}

impl CrfType {
    /// Parse a wire type code.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for reserved codes.
    pub fn from_code(code: u64) -> AvtpResult<Self> {
        match code {
            0 => Ok(Self::User),
            1 => Ok(Self::AudioSample),
            2 => Ok(Self::VideoFrame),
            3 => Ok(Self::VideoLine),
            4 => Ok(Self::MachineCycle),
            other => Err(AvtpError::invalid_argument(format!(
                "reserved CRF type {other}"
            ))),
        }
    }

    /// Wire code of this type.
    #[must_use]
    pub fn code(self) -> u16 {
        self as u16
    }
}

/// Multiplier applied to the base frequency (IEEE 1722-2016 Table 27).
///
/// Only [`CrfPull::MultiplyBy1`] is accepted by the header codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CrfPull {
    /// ×1.0
    #[default]
    MultiplyBy1 = 0,
    /// ×1/1.001
    MultiplyBy1Over1001 = 1,
    /// ×1.001
    MultiplyBy1001 = 2,
    /// ×24/25
    MultiplyBy24Over25 = 3,
    /// ×25/24
    MultiplyBy25Over24 = 4,
    /// ×1/8
    MultiplyBy1Over8 = 5,
}

impl CrfPull {
    /// Parse a pull code.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` for codes above 5.
    pub fn from_code(code: u64) -> AvtpResult<Self> {
        match code {
            0 => Ok(Self::MultiplyBy1),
            1 => Ok(Self::MultiplyBy1Over1001),
            2 => Ok(Self::MultiplyBy1001),
            3 => Ok(Self::MultiplyBy24Over25),
            4 => Ok(Self::MultiplyBy25Over24),
            5 => Ok(Self::MultiplyBy1Over8),
            other => Err(AvtpError::InvalidValue {
                field: "PULL",
                value: other,
                reason: "reserved pull code",
            }),
        }
    }

    /// Pull code as carried by the accessor API.
    #[must_use]
    pub fn code(self) -> u64 {
        self as u64
    }

    /// Nominal media clock rate for `base_hz` after applying this pull.
    #[must_use]
    pub fn apply(self, base_hz: u32) -> f64 {
        let base = f64::from(base_hz);
        match self {
            Self::MultiplyBy1 => base,
            Self::MultiplyBy1Over1001 => base / 1.001,
            Self::MultiplyBy1001 => base * 1.001,
            Self::MultiplyBy24Over25 => base * 24.0 / 25.0,
            Self::MultiplyBy25Over24 => base * 25.0 / 24.0,
            Self::MultiplyBy1Over8 => base / 8.0,
        }
    }
}
