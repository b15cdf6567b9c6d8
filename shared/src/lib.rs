//! # Volley Shared
//! Message envelopes, wire codecs, identifier allocation and the
//! host-authoritative message router used by every volley peer.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use volley_serde::{BitReader, BitWrite, BitWriter, Serde, SerdeErr};

mod codec;
mod identifiers;
mod messages;
mod role;
mod transport;
mod types;

pub use codec::{
    binary_codec::BinaryCodec,
    error::{CodecError, DecodeError, EncodeError},
    text_codec::TextCodec,
    Codec, CodecKind, WirePayload,
};
pub use identifiers::{
    error::IdAllocatorError,
    id_allocator::{CharacterId, IdAllocator, IdAllocatorConfig, PickupItemId},
};
pub use messages::{
    envelope::{Envelope, Payload},
    error::MessageManagerError,
    handlers::{CharacterHandler, Handlers, IgnoreHandler, InputHandler, SkillHandler},
    message_manager::{MessageManager, ReceiveOutcome},
    message_stats::MessageStats,
    outbox::Outbox,
    payload_kind::PayloadKind,
    payloads::{
        EntitySnapshot, InputPayload, LearnSkillPayload, PeerInfo, PlayersRosterPayload,
        TransformStatePayload,
    },
    target::{Route, Target, TransportTarget},
};
pub use role::{RoleQuery, SessionMode};
pub use transport::{error::TransportError, Transport};
pub use types::{PeerId, Reliability, SkillId, Tick, Vector2};
