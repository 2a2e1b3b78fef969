//! Session store error types.

use derive_more::Display;
use tictac_engine::SessionId;

/// Failure of a store operation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum StoreError {
    /// No live session has this identifier.
    #[display("Game with ID {_0} not found")]
    SessionNotFound(SessionId),
}

impl std::error::Error for StoreError {}
