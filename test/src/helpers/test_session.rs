use log::debug;
use volley_client::{Client, SessionConfig};
use volley_shared::{CodecKind, SessionMode};

use crate::local_transport::LocalTransportHub;

use super::{recorder::Recorder, skill_resolver::SkillResolver};

/// Upper bound on exchange rounds before a session is considered stuck
const MAX_EXCHANGE_ROUNDS: usize = 64;

/// One connected peer and the log of what its handlers saw
pub struct TestPeer {
    pub client: Client,
    pub recorder: Recorder,
}

/// A networked session of peers sharing one in-memory hub. Peer 0 is the
/// host, the rest are clients.
pub struct TestSession {
    pub hub: LocalTransportHub,
    pub peers: Vec<TestPeer>,
}

impl TestSession {
    pub fn new(codec: CodecKind, client_count: usize) -> Self {
        let hub = LocalTransportHub::new();
        let mut peers = Vec::with_capacity(client_count + 1);

        for index in 0..=client_count {
            let mode = if index == 0 {
                SessionMode::Host
            } else {
                SessionMode::Client
            };
            let config = SessionConfig {
                mode,
                codec,
                allow_pickup_id_override: true,
                ..SessionConfig::default()
            };
            peers.push(Self::spawn_peer(&hub, config));
        }
        hub.set_host(Some(0));

        Self { hub, peers }
    }

    fn spawn_peer(hub: &LocalTransportHub, config: SessionConfig) -> TestPeer {
        let recorder = Recorder::new();
        let handlers = recorder
            .handlers()
            .with_skill(SkillResolver::new(recorder.clone()));
        let client = Client::new(config, Box::new(hub.connect()), handlers);
        TestPeer { client, recorder }
    }

    pub fn host(&mut self) -> &mut TestPeer {
        &mut self.peers[0]
    }

    pub fn peer(&mut self, index: usize) -> &mut TestPeer {
        &mut self.peers[index]
    }

    /// Let every peer drain its inbox until nothing is left in flight,
    /// including replies sent from handlers. Returns payloads processed.
    pub fn exchange(&mut self) -> usize {
        let mut total = 0;
        for round in 0..MAX_EXCHANGE_ROUNDS {
            let processed: usize = self
                .peers
                .iter_mut()
                .map(|peer| peer.client.receive_all())
                .sum();
            if processed == 0 {
                debug!("Session settled after {} rounds, {} payloads", round, total);
                return total;
            }
            total += processed;
        }
        panic!("Session did not settle after {} exchange rounds", MAX_EXCHANGE_ROUNDS);
    }
}
