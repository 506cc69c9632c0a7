//! Error types for MonoLZ operations.
//!
//! All decode-side failures are fatal: a malformed stream aborts
//! decompression with a distinguishable error rather than producing a
//! partial or guessed result. Compression itself cannot fail on any byte
//! input; only the underlying writer can.

use std::io;
use thiserror::Error;

/// The main error type for MonoLZ operations.
#[derive(Debug, Error)]
pub enum MonoLzError {
    /// I/O error from the underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The container ended inside a frame (flag, literal, or offset field).
    #[error("Unexpected end of stream: expected {expected} more bytes")]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },

    /// The stream ended inside a monotone length code, before the
    /// terminating zero of the unary prefix or before the binary payload
    /// was complete.
    #[error("Truncated monotone code at bit position {bit_position}")]
    TruncatedCode {
        /// Bit position where the stream ran out.
        bit_position: u64,
    },

    /// A monotone code announced a binary payload too wide to name a
    /// representable length.
    #[error("Monotone code payload of {bits} bits exceeds the supported range")]
    OversizedCode {
        /// Announced payload width in bits.
        bits: u32,
    },

    /// A back-reference pointed before the start of the output produced so
    /// far (or had offset zero).
    #[error("Invalid back-reference: offset {offset} against {produced} bytes of output")]
    InvalidBackReference {
        /// The offending offset.
        offset: usize,
        /// Bytes of output produced when the reference was consumed.
        produced: usize,
    },

    /// A frame flag byte was neither 0 (literal) nor 1 (reference).
    #[error("Unknown frame flag: {flag:#04x}")]
    UnknownFrameFlag {
        /// The flag byte found.
        flag: u8,
    },
}

/// Result type alias for MonoLZ operations.
pub type Result<T> = std::result::Result<T, MonoLzError>;

impl MonoLzError {
    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Create a truncated monotone code error.
    pub fn truncated_code(bit_position: u64) -> Self {
        Self::TruncatedCode { bit_position }
    }

    /// Create an oversized monotone code error.
    pub fn oversized_code(bits: u32) -> Self {
        Self::OversizedCode { bits }
    }

    /// Create an invalid back-reference error.
    pub fn invalid_back_reference(offset: usize, produced: usize) -> Self {
        Self::InvalidBackReference { offset, produced }
    }

    /// Create an unknown frame flag error.
    pub fn unknown_frame_flag(flag: u8) -> Self {
        Self::UnknownFrameFlag { flag }
    }
}
