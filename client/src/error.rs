use thiserror::Error;

use volley_shared::{IdAllocatorError, MessageManagerError};

/// General client-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Message manager error
    #[error("Message manager error: {0}")]
    MessageManager(#[from] MessageManagerError),

    /// Identifier allocator error
    #[error("Identifier allocator error: {0}")]
    IdAllocator(#[from] IdAllocatorError),
}
