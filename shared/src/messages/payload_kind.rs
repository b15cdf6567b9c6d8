use std::fmt;

use volley_serde::{BitWrite, Serde, UnsignedInteger};

use crate::types::Reliability;

/// Discriminator of the payload an envelope carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PayloadKind {
    Input,
    TransformStateUpdate,
    FullTransformState,
    PlayersUpdate,
    LearnSkill,
    FireRateStateUpdate,
}

pub(crate) type PayloadKindIndex = UnsignedInteger<3>;

impl PayloadKind {
    pub const ALL: [PayloadKind; 6] = [
        PayloadKind::Input,
        PayloadKind::TransformStateUpdate,
        PayloadKind::FullTransformState,
        PayloadKind::PlayersUpdate,
        PayloadKind::LearnSkill,
        PayloadKind::FireRateStateUpdate,
    ];

    /// Reliability used when the sender does not pick one. Per-tick transform
    /// snapshots are superseded by the next tick, so they go unreliable.
    pub fn default_reliability(self) -> Reliability {
        match self {
            PayloadKind::TransformStateUpdate => Reliability::Unreliable,
            PayloadKind::Input
            | PayloadKind::FullTransformState
            | PayloadKind::PlayersUpdate
            | PayloadKind::LearnSkill
            | PayloadKind::FireRateStateUpdate => Reliability::Reliable,
        }
    }

    pub(crate) fn wire_index(self) -> u8 {
        match self {
            PayloadKind::Input => 0,
            PayloadKind::TransformStateUpdate => 1,
            PayloadKind::FullTransformState => 2,
            PayloadKind::PlayersUpdate => 3,
            PayloadKind::LearnSkill => 4,
            PayloadKind::FireRateStateUpdate => 5,
        }
    }

    pub(crate) fn from_wire_index(index: u8) -> Option<Self> {
        PayloadKind::ALL.get(index as usize).copied()
    }

    pub(crate) fn ser_index(self, writer: &mut dyn BitWrite) {
        PayloadKindIndex::new(self.wire_index()).ser(writer);
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
