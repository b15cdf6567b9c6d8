/// The part a peer plays in the current session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SessionMode {
    /// Single player. Nothing is transported, every message is self-delivered.
    #[default]
    Local,
    /// Network session, this peer is the authoritative host
    Host,
    /// Network session, some other peer is the host
    Client,
}

/// Role queries consulted on every send and receive.
pub trait RoleQuery: Send + Sync {
    fn is_local_session(&self) -> bool;
    fn is_authoritative_host(&self) -> bool;

    /// Whether this peer may process host-targeted messages
    fn processes_host_messages(&self) -> bool {
        self.is_local_session() || self.is_authoritative_host()
    }
}

impl RoleQuery for SessionMode {
    fn is_local_session(&self) -> bool {
        *self == SessionMode::Local
    }

    fn is_authoritative_host(&self) -> bool {
        *self == SessionMode::Host
    }
}
