use serde::{Deserialize, Serialize};
use volley_serde::{BitReader, BitWrite, ConstBitLength, Serde, SerdeErr, UnsignedInteger};

/// Which peers an envelope is addressed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// Delivered to the sending peer only, never transported
    Local,
    /// Every peer, the sender included
    All,
    /// Every peer except the sender
    Others,
    /// Only the authoritative host
    Host,
}

/// Where `Target` sends an envelope: straight back into the local receive
/// path, or through one of the transport's fan-out calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Local,
    Transport(TransportTarget),
}

/// The subset of targets a transport can carry. There is no `Local`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransportTarget {
    All,
    Others,
    Host,
}

impl Target {
    pub fn route(self) -> Route {
        match self {
            Target::Local => Route::Local,
            Target::All => Route::Transport(TransportTarget::All),
            Target::Others => Route::Transport(TransportTarget::Others),
            Target::Host => Route::Transport(TransportTarget::Host),
        }
    }

    /// Whether only the authoritative host (or a local session) may process it
    pub fn is_host_only(self) -> bool {
        self == Target::Host
    }
}

impl Serde for Target {
    fn ser(&self, writer: &mut dyn BitWrite) {
        let index: u8 = match self {
            Target::Local => 0,
            Target::All => 1,
            Target::Others => 2,
            Target::Host => 3,
        };
        UnsignedInteger::<2>::new(index).ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        match UnsignedInteger::<2>::de(reader)?.get() {
            0 => Ok(Target::Local),
            1 => Ok(Target::All),
            2 => Ok(Target::Others),
            3 => Ok(Target::Host),
            _ => Err(SerdeErr),
        }
    }

    fn bit_length(&self) -> u32 {
        <UnsignedInteger<2> as ConstBitLength>::const_bit_length()
    }
}
