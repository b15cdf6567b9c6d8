use serde::{Deserialize, Serialize};
use volley_serde::{
    BitReader, BitWrite, Serde, SerdeErr, SignedVariableInteger, UnsignedVariableInteger,
};

use crate::types::{PeerId, SkillId, Tick, Vector2};

type VarU32 = UnsignedVariableInteger<7>;
type VarI32 = SignedVariableInteger<7>;

fn ser_var_u32(value: u32, writer: &mut dyn BitWrite) {
    VarU32::new(value).ser(writer);
}

fn de_var_u32(reader: &mut BitReader) -> Result<u32, SerdeErr> {
    VarU32::de(reader)?.try_to()
}

fn ser_var_i32(value: i32, writer: &mut dyn BitWrite) {
    VarI32::new(value).ser(writer);
}

fn de_var_i32(reader: &mut BitReader) -> Result<i32, SerdeErr> {
    VarI32::de(reader)?.try_to()
}

// Input

/// One peer's input for one tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InputPayload {
    pub peer_id: PeerId,
    pub tick: Tick,
    pub move_vector: Vector2,
    pub look_vector: Vector2,
}

impl InputPayload {
    pub(crate) fn non_finite_field(&self) -> Option<&'static str> {
        if !self.move_vector.is_finite() {
            Some("moveVector")
        } else if !self.look_vector.is_finite() {
            Some("lookVector")
        } else {
            None
        }
    }
}

impl Serde for InputPayload {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.peer_id.ser(writer);
        ser_var_u32(self.tick, writer);
        self.move_vector.ser(writer);
        self.look_vector.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            peer_id: String::de(reader)?,
            tick: de_var_u32(reader)?,
            move_vector: Vector2::de(reader)?,
            look_vector: Vector2::de(reader)?,
        })
    }

    fn bit_length(&self) -> u32 {
        self.peer_id.bit_length()
            + VarU32::new(self.tick).bit_length()
            + self.move_vector.bit_length()
            + self.look_vector.bit_length()
    }
}

// Transform state

/// Replicated state of one character.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EntitySnapshot {
    pub peer_id: PeerId,
    pub name: String,
    pub max_hp: i32,
    pub current_hp: i32,
    pub move_speed: f32,
    pub bullet_speed: f32,
    pub damage: i32,
    pub shoot_frequency: f32,
    pub shoot_range: f32,
    pub critical_rate: f32,
    pub position: Vector2,
}

impl EntitySnapshot {
    pub(crate) fn non_finite_field(&self) -> Option<&'static str> {
        [
            ("moveSpeed", self.move_speed),
            ("bulletSpeed", self.bullet_speed),
            ("shootFrequency", self.shoot_frequency),
            ("shootRange", self.shoot_range),
            ("criticalRate", self.critical_rate),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(field, _)| field)
        .or_else(|| (!self.position.is_finite()).then_some("position"))
    }
}

impl Serde for EntitySnapshot {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.peer_id.ser(writer);
        self.name.ser(writer);
        ser_var_i32(self.max_hp, writer);
        ser_var_i32(self.current_hp, writer);
        self.move_speed.ser(writer);
        self.bullet_speed.ser(writer);
        ser_var_i32(self.damage, writer);
        self.shoot_frequency.ser(writer);
        self.shoot_range.ser(writer);
        self.critical_rate.ser(writer);
        self.position.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            peer_id: String::de(reader)?,
            name: String::de(reader)?,
            max_hp: de_var_i32(reader)?,
            current_hp: de_var_i32(reader)?,
            move_speed: f32::de(reader)?,
            bullet_speed: f32::de(reader)?,
            damage: de_var_i32(reader)?,
            shoot_frequency: f32::de(reader)?,
            shoot_range: f32::de(reader)?,
            critical_rate: f32::de(reader)?,
            position: Vector2::de(reader)?,
        })
    }

    fn bit_length(&self) -> u32 {
        self.peer_id.bit_length()
            + self.name.bit_length()
            + VarI32::new(self.max_hp).bit_length()
            + VarI32::new(self.current_hp).bit_length()
            + VarI32::new(self.damage).bit_length()
            + 5 * 32
            + self.position.bit_length()
    }
}

/// Snapshot of every replicated character at a tick.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TransformStatePayload {
    pub tick: Tick,
    pub entities: Vec<EntitySnapshot>,
}

impl TransformStatePayload {
    pub(crate) fn non_finite_field(&self) -> Option<&'static str> {
        self.entities
            .iter()
            .find_map(EntitySnapshot::non_finite_field)
    }
}

impl Serde for TransformStatePayload {
    fn ser(&self, writer: &mut dyn BitWrite) {
        ser_var_u32(self.tick, writer);
        self.entities.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            tick: de_var_u32(reader)?,
            entities: Vec::de(reader)?,
        })
    }

    fn bit_length(&self) -> u32 {
        VarU32::new(self.tick).bit_length() + self.entities.bit_length()
    }
}

// Roster

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PeerInfo {
    pub id: PeerId,
    pub name: String,
}

impl Serde for PeerInfo {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.id.ser(writer);
        self.name.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            id: String::de(reader)?,
            name: String::de(reader)?,
        })
    }

    fn bit_length(&self) -> u32 {
        self.id.bit_length() + self.name.bit_length()
    }
}

/// The current list of peers in the session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlayersRosterPayload {
    pub players: Vec<PeerInfo>,
}

impl Serde for PlayersRosterPayload {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.players.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            players: Vec::de(reader)?,
        })
    }

    fn bit_length(&self) -> u32 {
        self.players.bit_length()
    }
}

// Skills

/// A peer asks the host to resolve a skill it has chosen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LearnSkillPayload {
    pub skill_id: SkillId,
    pub peer_id: PeerId,
}

impl Serde for LearnSkillPayload {
    fn ser(&self, writer: &mut dyn BitWrite) {
        ser_var_u32(self.skill_id, writer);
        self.peer_id.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            skill_id: de_var_u32(reader)?,
            peer_id: String::de(reader)?,
        })
    }

    fn bit_length(&self) -> u32 {
        VarU32::new(self.skill_id).bit_length() + self.peer_id.bit_length()
    }
}
