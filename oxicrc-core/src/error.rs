//! Error types for OxiCrc operations.
//!
//! Every error is raised while building a [`CrcParams`](crate::CrcParams) or
//! while touching the outside world (catalog lookup, file access). The compute
//! paths themselves cannot fail once parameters are validated.

use std::io;
use thiserror::Error;

/// The main error type for OxiCrc operations.
#[derive(Debug, Error)]
pub enum CrcError {
    /// I/O error from an underlying file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Polynomial width outside the supported 1..=64 range.
    #[error("Unsupported CRC width: {width} (expected 1..=64)")]
    WidthUnsupported {
        /// The requested width.
        width: u8,
    },

    /// Polynomial has bits set above the declared width.
    #[error("Polynomial {poly:#x} does not fit in {width} bits")]
    PolyOutOfRange {
        /// The rejected polynomial.
        poly: u64,
        /// Declared width.
        width: u8,
    },

    /// Initial value has bits set above the declared width.
    #[error("Initial value {init:#x} does not fit in {width} bits")]
    InitOutOfRange {
        /// The rejected initial value.
        init: u64,
        /// Declared width.
        width: u8,
    },

    /// Final XOR value has bits set above the declared width.
    #[error("XOR-out value {xorout:#x} does not fit in {width} bits")]
    XoroutOutOfRange {
        /// The rejected XOR-out value.
        xorout: u64,
        /// Declared width.
        width: u8,
    },

    /// Self-test against the `"123456789"` check vector failed.
    #[error("Check value mismatch: expected {expected:#x}, computed {computed:#x}")]
    CheckMismatch {
        /// Check value supplied by the caller.
        expected: u64,
        /// CRC computed over the check vector.
        computed: u64,
    },

    /// No catalog model with the given name or alias.
    #[error("Unknown CRC model: {name}")]
    UnknownModel {
        /// Name that was looked up.
        name: String,
    },
}

/// Result type alias for OxiCrc operations.
pub type Result<T> = std::result::Result<T, CrcError>;

impl CrcError {
    /// Create an unsupported width error.
    pub fn width_unsupported(width: u8) -> Self {
        Self::WidthUnsupported { width }
    }

    /// Create a polynomial range error.
    pub fn poly_out_of_range(poly: u64, width: u8) -> Self {
        Self::PolyOutOfRange { poly, width }
    }

    /// Create an initial value range error.
    pub fn init_out_of_range(init: u64, width: u8) -> Self {
        Self::InitOutOfRange { init, width }
    }

    /// Create a XOR-out range error.
    pub fn xorout_out_of_range(xorout: u64, width: u8) -> Self {
        Self::XoroutOutOfRange { xorout, width }
    }

    /// Create a check mismatch error.
    pub fn check_mismatch(expected: u64, computed: u64) -> Self {
        Self::CheckMismatch { expected, computed }
    }

    /// Create an unknown model error.
    pub fn unknown_model(name: impl Into<String>) -> Self {
        Self::UnknownModel { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CrcError::width_unsupported(65);
        assert!(err.to_string().contains("65"));

        let err = CrcError::poly_out_of_range(0x1ff, 8);
        assert!(err.to_string().contains("0x1ff"));

        let err = CrcError::check_mismatch(0xCBF43926, 0xDEADBEEF);
        assert!(err.to_string().contains("Check value mismatch"));

        let err = CrcError::unknown_model("CRC-99/NOPE");
        assert!(err.to_string().contains("CRC-99/NOPE"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: CrcError = io_err.into();
        assert!(matches!(err, CrcError::Io(_)));
    }
}
