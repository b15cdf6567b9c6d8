use std::sync::Arc;

use log::{debug, info};

use volley_shared::{
    CharacterId, Envelope, Handlers, IdAllocator, IdAllocatorConfig, MessageManager,
    MessageStats, PickupItemId, ReceiveOutcome, Reliability, SessionMode, Transport,
};

use crate::{client_config::SessionConfig, error::ClientError};

/// Counter values a peer adopts when it takes over as host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HostBaseline {
    /// Last character id the previous host handed out
    pub last_character_id: u32,
    /// Last pickup item id the previous host handed out, if known
    pub last_pickup_item_id: Option<u32>,
}

/// One peer's view of a session.
pub struct Client {
    config: SessionConfig,
    mode: SessionMode,
    message_manager: MessageManager,
    id_allocator: Arc<IdAllocator>,
}

impl Client {
    /// Create a new Client with its own identifier allocator
    pub fn new(config: SessionConfig, transport: Box<dyn Transport>, handlers: Handlers) -> Self {
        let id_allocator = Arc::new(IdAllocator::with_config(IdAllocatorConfig {
            allow_pickup_override: config.allow_pickup_id_override,
        }));
        Self::with_id_allocator(config, transport, handlers, id_allocator)
    }

    /// Create a new Client sharing an existing allocator. The allocator's
    /// own config decides whether pickup overrides are allowed.
    pub fn with_id_allocator(
        config: SessionConfig,
        transport: Box<dyn Transport>,
        handlers: Handlers,
        id_allocator: Arc<IdAllocator>,
    ) -> Self {
        let mode = config.mode;
        let message_manager =
            MessageManager::new(Box::new(mode), config.codec.build(), transport, handlers);

        info!(
            "Session started as {:?} using {:?} codec",
            mode, config.codec
        );

        Self {
            config,
            mode,
            message_manager,
            id_allocator,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    // Role

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn is_host(&self) -> bool {
        self.mode == SessionMode::Host
    }

    /// Switches this peer's role. Routing and filtering pick it up immediately.
    pub fn set_mode(&mut self, mode: SessionMode) {
        if mode == self.mode {
            return;
        }
        info!("Peer role changed from {:?} to {:?}", self.mode, mode);
        self.mode = mode;
        self.message_manager.set_role(Box::new(mode));
    }

    /// Takes over as authoritative host after the previous one left, realigning
    /// the identifier counters to the previous host's values first so new
    /// allocations continue where it stopped.
    ///
    /// The pickup baseline is only applied when this peer's allocator allows
    /// pickup overrides. Otherwise it is ignored and the pickup counter keeps
    /// its own value.
    pub fn become_host(&mut self, baseline: HostBaseline) -> Result<(), ClientError> {
        match baseline.last_pickup_item_id {
            Some(last_pickup_item_id) if self.id_allocator.allows_pickup_override() => {
                self.id_allocator
                    .set_next_pickup_item_id(last_pickup_item_id)?;
            }
            Some(last_pickup_item_id) => {
                debug!(
                    "Ignoring pickup item baseline {}: pickup overrides are disabled",
                    last_pickup_item_id
                );
            }
            None => {}
        }
        self.id_allocator
            .set_next_character_id(baseline.last_character_id);
        self.set_mode(SessionMode::Host);
        Ok(())
    }

    /// The values a newly promoted host would need to continue allocating
    pub fn host_baseline(&self) -> HostBaseline {
        HostBaseline {
            last_character_id: self.id_allocator.current_character_id(),
            last_pickup_item_id: Some(self.id_allocator.current_pickup_item_id()),
        }
    }

    // Messages

    pub fn try_send(&mut self, envelope: Envelope, reliability: Reliability) -> Result<(), ClientError> {
        self.message_manager.try_send(envelope, reliability)?;
        Ok(())
    }

    pub fn send(&mut self, envelope: Envelope, reliability: Reliability) {
        self.message_manager.send(envelope, reliability);
    }

    pub fn send_default(&mut self, envelope: Envelope) {
        self.message_manager.send_default(envelope);
    }

    /// Processes what the transport has received, up to the configured budget.
    /// Call from the main loop.
    pub fn receive_all(&mut self) -> usize {
        self.message_manager.receive_all(self.config.receive_budget)
    }

    /// For transports that push bytes instead of being polled
    pub fn receive_bytes(&mut self, bytes: &[u8]) -> ReceiveOutcome {
        self.message_manager.receive_bytes(bytes)
    }

    pub fn stats(&self) -> &MessageStats {
        self.message_manager.stats()
    }

    // Identifiers

    /// Shared handle for code running outside the main loop, such as spawns
    /// triggered from network callbacks
    pub fn id_allocator(&self) -> Arc<IdAllocator> {
        Arc::clone(&self.id_allocator)
    }

    pub fn next_character_id(&self) -> CharacterId {
        self.id_allocator.next_character_id()
    }

    pub fn next_pickup_item_id(&self) -> PickupItemId {
        self.id_allocator.next_pickup_item_id()
    }
}
