use std::default::Default;

use volley_shared::{CodecKind, SessionMode};

/// Contains Config properties which will be used by a Client
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Role this peer starts the session in
    pub mode: SessionMode,
    /// Wire encoding. Every peer in a session must use the same one.
    pub codec: CodecKind,
    /// Whether the pickup item counter may be realigned the way the
    /// character counter is
    pub allow_pickup_id_override: bool,
    /// Maximum number of inbound messages processed per `receive_all` call.
    /// `None` drains everything the transport has queued.
    pub receive_budget: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: SessionMode::Local,
            codec: CodecKind::Binary,
            allow_pickup_id_override: false,
            receive_budget: None,
        }
    }
}
