pub mod error;

use crate::types::Reliability;

use self::error::TransportError;

/// The network session a peer sends through. Provided by the networking
/// library integration; fan-out and delivery guarantees are its job.
///
/// `send_to_all` delivers to every peer including the sender. `send_to_others`
/// skips the sender. `send_to_host` reaches the authoritative host only,
/// which may be the sender itself.
pub trait Transport: Send {
    fn send_to_all(&mut self, payload: &[u8], reliability: Reliability) -> Result<(), TransportError>;

    fn send_to_others(
        &mut self,
        payload: &[u8],
        reliability: Reliability,
    ) -> Result<(), TransportError>;

    fn send_to_host(&mut self, payload: &[u8], reliability: Reliability) -> Result<(), TransportError>;

    /// Next inbound payload, if one has arrived. Called from the main loop,
    /// which is where received messages get marshalled to.
    fn receive(&mut self) -> Result<Option<Vec<u8>>, TransportError>;
}
