pub mod binary_codec;
pub mod error;
pub mod text_codec;

use serde::{de::DeserializeOwned, Serialize};
use volley_serde::Serde;

use crate::messages::{
    envelope::Envelope,
    payloads::{InputPayload, LearnSkillPayload, PlayersRosterPayload, TransformStatePayload},
};

use self::{
    binary_codec::BinaryCodec,
    error::{DecodeError, EncodeError},
    text_codec::TextCodec,
};

/// Which wire encoding a session speaks. Both ends of a session must agree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CodecKind {
    /// Human-readable JSON. Larger, easier to inspect.
    Text,
    /// Bit-packed schema encoding. Smaller, used in production.
    #[default]
    Binary,
}

impl CodecKind {
    pub fn build(self) -> Box<dyn Codec> {
        match self {
            CodecKind::Text => Box::new(TextCodec),
            CodecKind::Binary => Box::new(BinaryCodec),
        }
    }
}

/// Converts envelopes to and from bytes. The bytes carry no codec marker:
/// decoding with a different codec than the one that encoded is undefined.
pub trait Codec: Send + Sync {
    fn kind(&self) -> CodecKind;
    fn encode(&self, envelope: &Envelope) -> Result<Vec<u8>, EncodeError>;
    fn decode(&self, bytes: &[u8]) -> Result<Envelope, DecodeError>;
}

/// A type both codecs know the schema of. The caller names the type when
/// decoding, there is no type tag in the bytes.
pub trait WirePayload: Serde + Serialize + DeserializeOwned {
    /// Name of a float field the text codec cannot represent
    fn first_non_finite_field(&self) -> Option<&'static str> {
        None
    }
}

impl WirePayload for Envelope {
    fn first_non_finite_field(&self) -> Option<&'static str> {
        self.payload().first_non_finite_field()
    }
}

impl WirePayload for InputPayload {
    fn first_non_finite_field(&self) -> Option<&'static str> {
        self.non_finite_field()
    }
}

impl WirePayload for TransformStatePayload {
    fn first_non_finite_field(&self) -> Option<&'static str> {
        self.non_finite_field()
    }
}

impl WirePayload for PlayersRosterPayload {}

impl WirePayload for LearnSkillPayload {}
