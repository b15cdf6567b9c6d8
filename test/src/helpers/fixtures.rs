use volley_shared::{
    EntitySnapshot, InputPayload, PeerInfo, PlayersRosterPayload, Tick, TransformStatePayload,
    Vector2,
};

pub fn input(peer_id: &str, tick: Tick) -> InputPayload {
    InputPayload {
        peer_id: peer_id.to_string(),
        tick,
        move_vector: Vector2::new(1.0, 0.0),
        look_vector: Vector2::new(0.0, -1.0),
    }
}

pub fn entity_snapshot(peer_id: &str) -> EntitySnapshot {
    EntitySnapshot {
        peer_id: peer_id.to_string(),
        name: format!("Player {}", peer_id),
        max_hp: 100,
        current_hp: 100,
        move_speed: 4.5,
        bullet_speed: 12.0,
        damage: 10,
        shoot_frequency: 2.0,
        shoot_range: 8.0,
        critical_rate: 0.05,
        position: Vector2::ZERO,
    }
}

pub fn transform_state(tick: Tick, peer_ids: &[&str]) -> TransformStatePayload {
    TransformStatePayload {
        tick,
        entities: peer_ids.iter().map(|id| entity_snapshot(id)).collect(),
    }
}

pub fn roster(peers: &[(&str, &str)]) -> PlayersRosterPayload {
    PlayersRosterPayload {
        players: peers
            .iter()
            .map(|(id, name)| PeerInfo {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect(),
    }
}
