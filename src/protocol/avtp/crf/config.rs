//! Stream-level settings applied when building a CRF header.

use serde::{Deserialize, Serialize};

use crate::error::{AvtpError, AvtpResult};

use super::base_freq;
use super::types::CrfType;

/// Bytes per timestamp in the CRF payload.
pub const TIMESTAMP_SIZE: u16 = 8;

/// Values used to populate a CRF header for one stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrfStreamConfig {
    /// Stream identifier (EUI-64)
    pub stream_id: u64,

    /// What the timestamps mark (default: audio samples)
    pub stream_type: CrfType,

    /// Base frequency in Hz (default: 48000)
    pub base_frequency: u32,

    /// Events between consecutive timestamps (default: 160)
    pub timestamp_interval: u16,

    /// Timestamps carried per PDU (default: 6)
    pub timestamps_per_pdu: u16,

    /// Set the frame sync flag
    pub frame_sync: bool,

    /// Set the timestamp-uncertain flag
    pub timestamp_uncertain: bool,
}

impl Default for CrfStreamConfig {
    fn default() -> Self {
        Self {
            stream_id: 0,
            stream_type: CrfType::AudioSample,
            base_frequency: 48_000,
            timestamp_interval: 160,
            timestamps_per_pdu: 6,
            frame_sync: false,
            timestamp_uncertain: false,
        }
    }
}

impl CrfStreamConfig {
    /// Create a new config builder
    #[must_use]
    pub fn builder() -> CrfStreamConfigBuilder {
        CrfStreamConfigBuilder::default()
    }

    /// Load a config from JSON; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the JSON is malformed, and any
    /// [`CrfStreamConfig::validate`] error.
    pub fn from_json(json: &str) -> AvtpResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| AvtpError::InvalidConfig {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if serialization fails.
    pub fn to_json(&self) -> AvtpResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| AvtpError::InvalidConfig {
            message: e.to_string(),
        })
    }

    /// Check that every value can be carried by a CRF header.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` for a base frequency outside the table or a
    /// payload too large for `CRF_DATA_LEN`.
    pub fn validate(&self) -> AvtpResult<()> {
        base_freq::encode(self.base_frequency.into())?;
        self.crf_data_len()?;
        Ok(())
    }

    /// Payload length in bytes for `timestamps_per_pdu` timestamps.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if the length does not fit in 16 bits.
    pub fn crf_data_len(&self) -> AvtpResult<u16> {
        self.timestamps_per_pdu
            .checked_mul(TIMESTAMP_SIZE)
            .ok_or(AvtpError::InvalidValue {
                field: "CRF_DATA_LEN",
                value: u64::from(self.timestamps_per_pdu) * u64::from(TIMESTAMP_SIZE),
                reason: "timestamp payload exceeds 16-bit length",
            })
    }
}

/// Builder for `CrfStreamConfig`
#[derive(Debug, Clone, Default)]
pub struct CrfStreamConfigBuilder {
    config: CrfStreamConfig,
}

impl CrfStreamConfigBuilder {
    /// Set stream identifier
    #[must_use]
    pub fn stream_id(mut self, stream_id: u64) -> Self {
        self.config.stream_id = stream_id;
        self
    }

    /// Set stream type
    #[must_use]
    pub fn stream_type(mut self, stream_type: CrfType) -> Self {
        self.config.stream_type = stream_type;
        self
    }

    /// Set base frequency in Hz
    #[must_use]
    pub fn base_frequency(mut self, hz: u32) -> Self {
        self.config.base_frequency = hz;
        self
    }

    /// Set timestamp interval
    #[must_use]
    pub fn timestamp_interval(mut self, interval: u16) -> Self {
        self.config.timestamp_interval = interval;
        self
    }

    /// Set number of timestamps per PDU
    #[must_use]
    pub fn timestamps_per_pdu(mut self, count: u16) -> Self {
        self.config.timestamps_per_pdu = count;
        self
    }

    /// Set frame sync flag
    #[must_use]
    pub fn frame_sync(mut self, enable: bool) -> Self {
        self.config.frame_sync = enable;
        self
    }

    /// Set timestamp-uncertain flag
    #[must_use]
    pub fn timestamp_uncertain(mut self, enable: bool) -> Self {
        self.config.timestamp_uncertain = enable;
        self
    }

    /// Build the config
    ///
    /// # Errors
    ///
    /// Returns any [`CrfStreamConfig::validate`] error.
    pub fn build(self) -> AvtpResult<CrfStreamConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
