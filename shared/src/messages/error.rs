use thiserror::Error;

use crate::{codec::error::EncodeError, transport::error::TransportError};

/// Errors that can occur while routing an outgoing message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageManagerError {
    /// The session codec could not encode the envelope
    #[error("Failed to encode outgoing message: {0}")]
    Encode(#[from] EncodeError),

    /// The transport refused the encoded bytes
    #[error("Transport refused outgoing message: {0}")]
    Transport(#[from] TransportError),
}
