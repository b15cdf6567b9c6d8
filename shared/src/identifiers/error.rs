use thiserror::Error;

/// Errors that can occur during identifier allocation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdAllocatorError {
    /// Pickup counter override attempted while the capability is switched off
    #[error("Cannot set the pickup item counter to {value}: pickup overrides are disabled. Enable allow_pickup_override in IdAllocatorConfig")]
    PickupOverrideDisabled {
        value: u32,
    },
}
