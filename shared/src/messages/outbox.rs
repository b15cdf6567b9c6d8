use crate::{messages::envelope::Envelope, types::Reliability};

/// Envelopes a handler wants sent once it returns. Handed to every handler
/// call so gameplay code can reply without holding the message manager.
///
/// Replies that route locally are queued behind the envelope being handled,
/// not dispatched inside it, so a handler that answers its own kind locally
/// loops until it stops replying but never nests.
#[derive(Debug, Default)]
pub struct Outbox {
    queued: Vec<(Envelope, Reliability)>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send(&mut self, envelope: Envelope, reliability: Reliability) {
        self.queued.push((envelope, reliability));
    }

    /// Queues with the payload kind's default reliability
    pub fn send_default(&mut self, envelope: Envelope) {
        let reliability = envelope.kind().default_reliability();
        self.send(envelope, reliability);
    }

    pub fn len(&self) -> usize {
        self.queued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }

    pub(crate) fn into_queued(self) -> Vec<(Envelope, Reliability)> {
        self.queued
    }
}
