use thiserror::Error;
use volley_serde::SerdeErr;

/// Errors that can occur while turning a payload into bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Float field holds NaN or infinity, which the text encoding cannot carry
    #[error("Field {field} is not a finite number and cannot be written by the text codec")]
    NonFiniteFloat {
        field: &'static str,
    },

    /// serde_json refused the value
    #[error("Text encoding failed: {reason}")]
    Text {
        reason: String,
    },
}

/// Errors that can occur while reading a payload from bytes
///
/// SECURITY: decode input comes from remote peers. Every failure here is
/// reported, never panicked on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The bit stream ended early or carried a value the schema cannot hold
    #[error("Malformed binary message: {0}")]
    Malformed(#[from] SerdeErr),

    /// Payload kind discriminator out of range
    #[error("Unknown payload kind index {index} received. This may indicate a schema mismatch or a malicious packet")]
    UnknownPayloadKind {
        index: u8,
    },

    /// Bytes left over after a complete message
    #[error("Message decoded from {consumed} of {length} bytes; trailing bytes indicate a schema mismatch")]
    TrailingBytes {
        consumed: usize,
        length: usize,
    },

    /// JSON was malformed or did not match the schema
    #[error("Text decoding failed: {reason}")]
    Text {
        reason: String,
    },
}

/// General codec-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}
