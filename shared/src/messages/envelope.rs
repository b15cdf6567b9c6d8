use serde::{Deserialize, Serialize};
use volley_serde::{BitCounter, BitReader, BitWrite, Serde, SerdeErr};

use crate::{
    codec::binary_codec::read_envelope,
    messages::{
        payload_kind::PayloadKind,
        payloads::{InputPayload, LearnSkillPayload, PlayersRosterPayload, TransformStatePayload},
        target::Target,
    },
    types::{PeerId, SkillId},
};

/// Exactly one payload, tagged by its kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum Payload {
    Input(InputPayload),
    TransformStateUpdate(TransformStatePayload),
    FullTransformState(TransformStatePayload),
    PlayersUpdate(PlayersRosterPayload),
    LearnSkill(LearnSkillPayload),
    /// Snapshots of the characters whose fire rate changed
    FireRateStateUpdate(TransformStatePayload),
}

impl Payload {
    pub fn kind(&self) -> PayloadKind {
        match self {
            Payload::Input(_) => PayloadKind::Input,
            Payload::TransformStateUpdate(_) => PayloadKind::TransformStateUpdate,
            Payload::FullTransformState(_) => PayloadKind::FullTransformState,
            Payload::PlayersUpdate(_) => PayloadKind::PlayersUpdate,
            Payload::LearnSkill(_) => PayloadKind::LearnSkill,
            Payload::FireRateStateUpdate(_) => PayloadKind::FireRateStateUpdate,
        }
    }

    /// Name of the first float field that is NaN or infinite, if any
    pub fn first_non_finite_field(&self) -> Option<&'static str> {
        match self {
            Payload::Input(input) => input.non_finite_field(),
            Payload::TransformStateUpdate(state)
            | Payload::FullTransformState(state)
            | Payload::FireRateStateUpdate(state) => state.non_finite_field(),
            Payload::PlayersUpdate(_) | Payload::LearnSkill(_) => None,
        }
    }

    pub(crate) fn ser_body(&self, writer: &mut dyn BitWrite) {
        match self {
            Payload::Input(input) => input.ser(writer),
            Payload::TransformStateUpdate(state)
            | Payload::FullTransformState(state)
            | Payload::FireRateStateUpdate(state) => state.ser(writer),
            Payload::PlayersUpdate(roster) => roster.ser(writer),
            Payload::LearnSkill(learn_skill) => learn_skill.ser(writer),
        }
    }

    pub(crate) fn de_body(kind: PayloadKind, reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(match kind {
            PayloadKind::Input => Payload::Input(InputPayload::de(reader)?),
            PayloadKind::TransformStateUpdate => {
                Payload::TransformStateUpdate(TransformStatePayload::de(reader)?)
            }
            PayloadKind::FullTransformState => {
                Payload::FullTransformState(TransformStatePayload::de(reader)?)
            }
            PayloadKind::PlayersUpdate => Payload::PlayersUpdate(PlayersRosterPayload::de(reader)?),
            PayloadKind::LearnSkill => Payload::LearnSkill(LearnSkillPayload::de(reader)?),
            PayloadKind::FireRateStateUpdate => {
                Payload::FireRateStateUpdate(TransformStatePayload::de(reader)?)
            }
        })
    }
}

/// The routed unit of communication: a delivery target plus one payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Envelope {
    target: Target,
    payload: Payload,
}

impl Envelope {
    pub fn new(target: Target, payload: Payload) -> Self {
        Self { target, payload }
    }

    pub fn input(target: Target, input: InputPayload) -> Self {
        Self::new(target, Payload::Input(input))
    }

    pub fn transform_state_update(target: Target, state: TransformStatePayload) -> Self {
        Self::new(target, Payload::TransformStateUpdate(state))
    }

    pub fn full_transform_state(target: Target, state: TransformStatePayload) -> Self {
        Self::new(target, Payload::FullTransformState(state))
    }

    pub fn players_update(target: Target, roster: PlayersRosterPayload) -> Self {
        Self::new(target, Payload::PlayersUpdate(roster))
    }

    pub fn learn_skill(target: Target, skill_id: SkillId, peer_id: impl Into<PeerId>) -> Self {
        Self::new(
            target,
            Payload::LearnSkill(LearnSkillPayload {
                skill_id,
                peer_id: peer_id.into(),
            }),
        )
    }

    pub fn fire_rate_state_update(target: Target, state: TransformStatePayload) -> Self {
        Self::new(target, Payload::FireRateStateUpdate(state))
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn kind(&self) -> PayloadKind {
        self.payload.kind()
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn into_payload(self) -> Payload {
        self.payload
    }

    /// Same payload, different addressee
    pub fn retarget(mut self, target: Target) -> Self {
        self.target = target;
        self
    }
}

impl Serde for Envelope {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.target.ser(writer);
        self.payload.kind().ser_index(writer);
        self.payload.ser_body(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        read_envelope(reader).map_err(|_| SerdeErr)
    }

    fn bit_length(&self) -> u32 {
        let mut counter = BitCounter::new();
        self.ser(&mut counter);
        counter.bits_needed()
    }
}
