use thiserror::Error;

/// Errors a transport may report when handing off or collecting payloads
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The session is gone; nothing can be sent or received
    #[error("Transport session is disconnected")]
    Disconnected,

    /// A host-targeted send was attempted while no host is known
    #[error("No authoritative host is connected to receive the message")]
    NoHost,

    /// The underlying networking library rejected the payload
    #[error("Transport rejected a {length}-byte payload: {reason}")]
    SendFailed {
        length: usize,
        reason: String,
    },
}
