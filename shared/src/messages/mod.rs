pub mod envelope;
pub mod error;
pub mod handlers;
pub mod message_manager;
pub mod message_stats;
pub mod outbox;
pub mod payload_kind;
pub mod payloads;
pub mod target;
