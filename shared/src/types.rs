use serde::{Deserialize, Serialize};
use volley_serde::{BitReader, BitWrite, ConstBitLength, Serde, SerdeErr};

pub type Tick = u32;
pub type PeerId = String;
pub type SkillId = u32;

/// Delivery guarantee requested for a single send.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reliability {
    /// Guaranteed, ordered per sender
    Reliable,
    /// Best effort, for high-frequency state that is superseded next tick
    Unreliable,
}

impl Reliability {
    pub fn is_reliable(self) -> bool {
        self == Reliability::Reliable
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Serde for Vector2 {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.x.ser(writer);
        self.y.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            x: f32::de(reader)?,
            y: f32::de(reader)?,
        })
    }

    fn bit_length(&self) -> u32 {
        Self::const_bit_length()
    }
}

impl ConstBitLength for Vector2 {
    fn const_bit_length() -> u32 {
        <f32 as ConstBitLength>::const_bit_length() * 2
    }
}
