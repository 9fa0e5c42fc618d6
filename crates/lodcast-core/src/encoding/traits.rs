//! Encoding and decoding traits for serialization.

use crate::CoreError;

/// A trait for types that can be encoded to bytes.
///
/// Implementations produce compact, fixed-layout output suitable for
/// handing straight to a response writer.
pub trait Encoder: Sized {
    /// Encode this value to bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails (e.g., a section too long for its
    /// length prefix).
    fn encode(&self) -> Result<Vec<u8>, CoreError>;

    /// Encode this value into a pre-allocated buffer.
    ///
    /// Appends the encoded bytes to the provided buffer, which can be more
    /// efficient when encoding multiple values.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    fn encode_to(&self, buf: &mut Vec<u8>) -> Result<(), CoreError>;
}

/// A trait for types that can be decoded from bytes.
pub trait Decoder: Sized {
    /// Decode a value from bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if decoding fails (e.g., truncated input or
    /// inconsistent section lengths).
    fn decode(bytes: &[u8]) -> Result<Self, CoreError>;
}
