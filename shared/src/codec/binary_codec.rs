use volley_serde::{BitReader, BitWriter, Serde};

use super::{
    error::{DecodeError, EncodeError},
    Codec, CodecKind, WirePayload,
};
use crate::messages::{
    envelope::{Envelope, Payload},
    payload_kind::{PayloadKind, PayloadKindIndex},
    target::Target,
};

/// Bit-packed encoding. Layout of an envelope: 2-bit target, 3-bit payload
/// kind, then the payload fields in declaration order.
#[derive(Clone, Copy, Debug, Default)]
pub struct BinaryCodec;

impl BinaryCodec {
    pub fn encode_payload<P: WirePayload>(&self, payload: &P) -> Vec<u8> {
        let bytes = payload.bit_length().div_ceil(8) as usize;
        let mut writer = BitWriter::with_capacity(bytes);
        payload.ser(&mut writer);
        writer.to_bytes()
    }

    pub fn decode_payload<P: WirePayload>(&self, bytes: &[u8]) -> Result<P, DecodeError> {
        let mut reader = BitReader::new(bytes);
        let payload = P::de(&mut reader)?;
        check_fully_consumed(&reader, bytes)?;
        Ok(payload)
    }
}

impl Codec for BinaryCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::Binary
    }

    fn encode(&self, envelope: &Envelope) -> Result<Vec<u8>, EncodeError> {
        Ok(self.encode_payload(envelope))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Envelope, DecodeError> {
        let mut reader = BitReader::new(bytes);
        let envelope = read_envelope(&mut reader)?;
        check_fully_consumed(&reader, bytes)?;
        Ok(envelope)
    }
}

fn check_fully_consumed(reader: &BitReader, bytes: &[u8]) -> Result<(), DecodeError> {
    let consumed = reader.bytes_consumed();
    if consumed < bytes.len() {
        return Err(DecodeError::TrailingBytes {
            consumed,
            length: bytes.len(),
        });
    }
    Ok(())
}

pub(crate) fn read_envelope(reader: &mut BitReader) -> Result<Envelope, DecodeError> {
    let target = Target::de(reader)?;
    let index: u8 = PayloadKindIndex::de(reader)?.try_to()?;
    let Some(kind) = PayloadKind::from_wire_index(index) else {
        return Err(DecodeError::UnknownPayloadKind { index });
    };
    let payload = Payload::de_body(kind, reader)?;
    Ok(Envelope::new(target, payload))
}
