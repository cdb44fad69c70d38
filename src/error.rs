use thiserror::Error;

/// Errors returned by the AVTP header codecs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvtpError {
    /// The requested field or identifier has no accessor
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected argument
        message: String,
    },

    /// The value cannot be represented in the target field
    #[error("invalid value {value} for {field}: {reason}")]
    InvalidValue {
        /// Name of the field being read or written
        field: &'static str,
        /// The offending value (wire code on decode, requested value on encode)
        value: u64,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// A byte buffer is shorter than the fixed header
    #[error("buffer too small: need {needed} bytes, have {have}")]
    BufferTooSmall {
        /// Bytes required
        needed: usize,
        /// Bytes available
        have: usize,
    },

    /// A stream configuration could not be parsed or serialized
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of the failure
        message: String,
    },
}

impl AvtpError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Check if this error was raised for an unknown or unsupported field
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check if this error was raised for a value outside a field's domain
    #[must_use]
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }
}

/// Result type alias for AVTP codec operations
pub type AvtpResult<T> = std::result::Result<T, AvtpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AvtpError::InvalidValue {
            field: "BASE_FREQ",
            value: 99_999,
            reason: "no matching table entry",
        };
        assert_eq!(
            err.to_string(),
            "invalid value 99999 for BASE_FREQ: no matching table entry"
        );

        let err = AvtpError::BufferTooSmall {
            needed: 20,
            have: 4,
        };
        assert_eq!(err.to_string(), "buffer too small: need 20 bytes, have 4");
    }

    #[test]
    fn test_error_classification() {
        let arg = AvtpError::invalid_argument("TV has no getter");
        assert!(arg.is_invalid_argument());
        assert!(!arg.is_invalid_value());

        let value = AvtpError::InvalidValue {
            field: "PULL",
            value: 3,
            reason: "only multiply-by-1 is supported",
        };
        assert!(value.is_invalid_value());
        assert!(!value.is_invalid_argument());
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AvtpError>();
    }
}
