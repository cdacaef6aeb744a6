//! Error types for rowbuf.
//!
//! Pool operations are total and never produce an error. Everything here
//! comes from the conversion layer or from configuration validation, and is
//! handed back to the immediate caller without logging or retrying.

use thiserror::Error;

use crate::convert::ScalarKind;

/// Errors that can occur while encoding, decoding, or configuring pools.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RowBufError {
    /// The value has no byte encoding (for example a complex or composite
    /// column).
    #[error("unsupported column value type: {type_name}")]
    UnsupportedType {
        /// Runtime type description of the rejected value.
        type_name: &'static str,
    },

    /// A fixed-width kind was decoded from the wrong number of bytes.
    #[error("{kind} expects {expected} bytes, got {actual}")]
    WidthMismatch {
        /// The kind being decoded.
        kind: ScalarKind,
        /// The encoded width of `kind`.
        expected: usize,
        /// The number of bytes supplied.
        actual: usize,
    },

    /// A string column did not hold valid UTF-8.
    #[error("invalid utf-8 in string column: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_error_conversion() {
        let bad = vec![0x66u8, 0xff, 0x6f];
        let utf8_err = std::str::from_utf8(&bad).unwrap_err();
        let err: RowBufError = utf8_err.into();
        assert!(matches!(err, RowBufError::InvalidUtf8(_)));
    }

    #[test]
    fn test_display() {
        let err = RowBufError::UnsupportedType {
            type_name: "complex128",
        };
        assert_eq!(err.to_string(), "unsupported column value type: complex128");

        let err = RowBufError::WidthMismatch {
            kind: ScalarKind::Int32,
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "int32 expects 4 bytes, got 3");
    }
}
