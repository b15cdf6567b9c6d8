use std::{
    fmt,
    sync::atomic::{AtomicU32, Ordering},
};

use log::info;

use super::error::IdAllocatorError;

/// Identifier of a character. Lives in its own space, never comparable to a
/// `PickupItemId` even when the numbers match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CharacterId(u32);

impl CharacterId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "character#{}", self.0)
    }
}

/// Identifier of a pickup item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PickupItemId(u32);

impl PickupItemId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PickupItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pickup#{}", self.0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct IdAllocatorConfig {
    /// Whether `set_next_pickup_item_id` may overwrite the pickup counter
    pub allow_pickup_override: bool,
}

/// Monotonic allocator for the character and pickup item identifier spaces.
///
/// Each counter holds the last value it handed out, so the first allocation
/// returns 1. Values are never recycled. Both counters are atomics and the
/// allocator is meant to be shared behind an `Arc` between the main loop and
/// network callbacks.
///
/// Uniqueness holds within one process only. Peers realign against the host
/// with `set_next_character_id`.
#[derive(Debug, Default)]
pub struct IdAllocator {
    character_counter: AtomicU32,
    pickup_item_counter: AtomicU32,
    allow_pickup_override: bool,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: IdAllocatorConfig) -> Self {
        Self {
            character_counter: AtomicU32::new(0),
            pickup_item_counter: AtomicU32::new(0),
            allow_pickup_override: config.allow_pickup_override,
        }
    }

    // Characters

    pub fn next_character_id(&self) -> CharacterId {
        let previous = self.character_counter.fetch_add(1, Ordering::SeqCst);
        CharacterId(previous.wrapping_add(1))
    }

    /// Overwrites the character counter. The next allocation returns `value + 1`.
    pub fn set_next_character_id(&self, value: u32) {
        let previous = self.character_counter.swap(value, Ordering::SeqCst);
        info!(
            "Character id counter realigned from {} to {}",
            previous, value
        );
    }

    /// Last character id handed out, or 0 if none has been
    pub fn current_character_id(&self) -> u32 {
        self.character_counter.load(Ordering::SeqCst)
    }

    // Pickup items

    pub fn next_pickup_item_id(&self) -> PickupItemId {
        let previous = self.pickup_item_counter.fetch_add(1, Ordering::SeqCst);
        PickupItemId(previous.wrapping_add(1))
    }

    /// Overwrites the pickup item counter, if this allocator was configured
    /// to allow it. The next allocation returns `value + 1`.
    pub fn set_next_pickup_item_id(&self, value: u32) -> Result<(), IdAllocatorError> {
        if !self.allow_pickup_override {
            return Err(IdAllocatorError::PickupOverrideDisabled { value });
        }
        let previous = self.pickup_item_counter.swap(value, Ordering::SeqCst);
        info!(
            "Pickup item id counter realigned from {} to {}",
            previous, value
        );
        Ok(())
    }

    pub fn current_pickup_item_id(&self) -> u32 {
        self.pickup_item_counter.load(Ordering::SeqCst)
    }

    pub fn allows_pickup_override(&self) -> bool {
        self.allow_pickup_override
    }
}
