use super::{
    error::{DecodeError, EncodeError},
    Codec, CodecKind, WirePayload,
};
use crate::messages::envelope::Envelope;

/// JSON encoding via serde_json.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextCodec;

impl TextCodec {
    pub fn encode_payload<P: WirePayload>(&self, payload: &P) -> Result<Vec<u8>, EncodeError> {
        // serde_json writes NaN as null, which would not read back
        if let Some(field) = payload.first_non_finite_field() {
            return Err(EncodeError::NonFiniteFloat { field });
        }
        serde_json::to_vec(payload).map_err(|err| EncodeError::Text {
            reason: err.to_string(),
        })
    }

    pub fn decode_payload<P: WirePayload>(&self, bytes: &[u8]) -> Result<P, DecodeError> {
        serde_json::from_slice(bytes).map_err(|err| DecodeError::Text {
            reason: err.to_string(),
        })
    }
}

impl Codec for TextCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::Text
    }

    fn encode(&self, envelope: &Envelope) -> Result<Vec<u8>, EncodeError> {
        self.encode_payload(envelope)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Envelope, DecodeError> {
        self.decode_payload(bytes)
    }
}
