use std::collections::BTreeMap;

use crate::messages::payload_kind::PayloadKind;

/// Running counters kept by the message manager.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageStats {
    /// Envelopes delivered straight to the local receive path
    pub sent_local: u64,
    /// Envelopes handed to the transport
    pub sent_transport: u64,
    /// Sends that failed to encode or were rejected by the transport
    pub send_failures: u64,
    /// Host-targeted envelopes dropped because this peer is not the host
    pub filtered: u64,
    /// Inbound payloads that failed to decode
    pub malformed: u64,
    dispatched: BTreeMap<PayloadKind, u64>,
}

impl MessageStats {
    pub(crate) fn record_dispatch(&mut self, kind: PayloadKind) {
        *self.dispatched.entry(kind).or_insert(0) += 1;
    }

    pub fn dispatched(&self, kind: PayloadKind) -> u64 {
        self.dispatched.get(&kind).copied().unwrap_or(0)
    }

    pub fn total_dispatched(&self) -> u64 {
        self.dispatched.values().sum()
    }
}
