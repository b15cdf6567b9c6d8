use thiserror::Error;

/// Returned when a bit stream cannot be read back into a value: the stream
/// ended early, or it carried a value the target type cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Failed to deserialize value from bit stream")]
pub struct SerdeErr;
