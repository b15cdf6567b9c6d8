use std::collections::VecDeque;

use log::{debug, trace, warn};

use crate::{
    codec::{Codec, CodecKind},
    messages::{
        envelope::Envelope,
        error::MessageManagerError,
        handlers::Handlers,
        message_stats::MessageStats,
        outbox::Outbox,
        payload_kind::PayloadKind,
        target::{Route, TransportTarget},
    },
    role::RoleQuery,
    transport::Transport,
    types::Reliability,
};

/// What happened to an envelope handed to the receive path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReceiveOutcome {
    /// Handed to the handler for this kind
    Dispatched(PayloadKind),
    /// Host-targeted and this peer is not the host
    Filtered,
    /// Bytes did not decode into an envelope
    Malformed,
}

/// Single entry and exit point for gameplay messages. Decides whether an
/// envelope is delivered locally or handed to the transport, and on receipt
/// filters by this peer's role before dispatching to a handler.
///
/// One instance per session. Gameplay code never mutates state from here:
/// handlers do, and anything they want sent goes back through their `Outbox`.
pub struct MessageManager {
    role: Box<dyn RoleQuery>,
    codec: Box<dyn Codec>,
    transport: Box<dyn Transport>,
    handlers: Handlers,
    stats: MessageStats,
    local_queue: VecDeque<Envelope>,
    delivering_local: bool,
}

impl MessageManager {
    pub fn new(
        role: Box<dyn RoleQuery>,
        codec: Box<dyn Codec>,
        transport: Box<dyn Transport>,
        handlers: Handlers,
    ) -> Self {
        Self {
            role,
            codec,
            transport,
            handlers,
            stats: MessageStats::default(),
            local_queue: VecDeque::new(),
            delivering_local: false,
        }
    }

    /// Replaces the role this peer plays. Takes effect on the next send or receive.
    pub fn set_role(&mut self, role: Box<dyn RoleQuery>) {
        self.role = role;
    }

    pub fn role(&self) -> &dyn RoleQuery {
        self.role.as_ref()
    }

    pub fn codec_kind(&self) -> CodecKind {
        self.codec.kind()
    }

    pub fn stats(&self) -> &MessageStats {
        &self.stats
    }

    // Outgoing Messages

    /// Routes an envelope. In a local session, or for a `Local` target, the
    /// envelope is delivered to `receive` directly and the transport is never
    /// touched. Otherwise it is encoded and handed to the transport call
    /// matching its target, with `reliability` passed through unchanged.
    pub fn try_send(
        &mut self,
        envelope: Envelope,
        reliability: Reliability,
    ) -> Result<(), MessageManagerError> {
        match self.resolve_route(&envelope) {
            Route::Local => {
                self.stats.sent_local += 1;
                self.deliver_local(envelope);
                Ok(())
            }
            Route::Transport(target) => {
                let result = self.transmit(target, &envelope, reliability);
                match result {
                    Ok(()) => self.stats.sent_transport += 1,
                    Err(_) => self.stats.send_failures += 1,
                }
                result
            }
        }
    }

    /// Same as `try_send`, but a failure is logged and the message dropped
    pub fn send(&mut self, envelope: Envelope, reliability: Reliability) {
        let kind = envelope.kind();
        if let Err(err) = self.try_send(envelope, reliability) {
            warn!("Dropping outgoing {} message: {}", kind, err);
        }
    }

    /// Sends with the payload kind's default reliability
    pub fn send_default(&mut self, envelope: Envelope) {
        let reliability = envelope.kind().default_reliability();
        self.send(envelope, reliability);
    }

    // A local send made while a local envelope is being handled is queued
    // and picked up by the outer drain loop, keeping dispatch depth at one.
    fn deliver_local(&mut self, envelope: Envelope) {
        self.local_queue.push_back(envelope);
        if self.delivering_local {
            return;
        }
        self.delivering_local = true;
        while let Some(envelope) = self.local_queue.pop_front() {
            self.receive(envelope);
        }
        self.delivering_local = false;
    }

    fn resolve_route(&self, envelope: &Envelope) -> Route {
        if self.role.is_local_session() {
            return Route::Local;
        }
        envelope.target().route()
    }

    fn transmit(
        &mut self,
        target: TransportTarget,
        envelope: &Envelope,
        reliability: Reliability,
    ) -> Result<(), MessageManagerError> {
        let bytes = self.codec.encode(envelope)?;
        trace!(
            "Sending {} message to {:?} ({} bytes, {:?})",
            envelope.kind(),
            target,
            bytes.len(),
            reliability
        );
        match target {
            TransportTarget::All => self.transport.send_to_all(&bytes, reliability)?,
            TransportTarget::Others => self.transport.send_to_others(&bytes, reliability)?,
            TransportTarget::Host => self.transport.send_to_host(&bytes, reliability)?,
        }
        Ok(())
    }

    // Incoming Messages

    /// Applies the role filter and dispatches to the handler for the
    /// envelope's kind. Host-targeted envelopes are dropped unless this peer
    /// is the authoritative host or a local session.
    pub fn receive(&mut self, envelope: Envelope) -> ReceiveOutcome {
        let kind = envelope.kind();

        if envelope.target().is_host_only() && !self.role.processes_host_messages() {
            debug!(
                "Ignoring host-targeted {} message: this peer is not the authoritative host",
                kind
            );
            self.stats.filtered += 1;
            return ReceiveOutcome::Filtered;
        }

        trace!("Dispatching {} message", kind);
        let mut outbox = Outbox::new();
        self.handlers.dispatch(envelope, &mut outbox);
        self.stats.record_dispatch(kind);

        self.flush_outbox(outbox);

        ReceiveOutcome::Dispatched(kind)
    }

    /// Decodes bytes from a remote peer with the session codec, then receives
    /// them. Undecodable bytes are dropped.
    pub fn receive_bytes(&mut self, bytes: &[u8]) -> ReceiveOutcome {
        match self.codec.decode(bytes) {
            Ok(envelope) => self.receive(envelope),
            Err(err) => {
                warn!("Dropping malformed message of {} bytes: {}", bytes.len(), err);
                self.stats.malformed += 1;
                ReceiveOutcome::Malformed
            }
        }
    }

    /// Drains the transport's inbound queue, processing at most `budget`
    /// payloads when one is given. Returns how many were processed.
    pub fn receive_all(&mut self, budget: Option<usize>) -> usize {
        let mut processed = 0;
        while budget.map_or(true, |budget| processed < budget) {
            match self.transport.receive() {
                Ok(Some(bytes)) => {
                    self.receive_bytes(&bytes);
                    processed += 1;
                }
                Ok(None) => break,
                Err(err) => {
                    warn!("Transport receive failed: {}", err);
                    break;
                }
            }
        }
        processed
    }

    fn flush_outbox(&mut self, outbox: Outbox) {
        for (envelope, reliability) in outbox.into_queued() {
            self.send(envelope, reliability);
        }
    }
}
