//! Error types for scheduler operations.

use thiserror::Error;

/// Errors produced by the heap, the history log and the scheduler façade.
///
/// Both kinds are expected outcomes. Callers check and report them; nothing
/// in this crate panics on either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// The target container is already at its fixed capacity.
    #[error("capacity exceeded")]
    CapacityExceeded,
    /// There is nothing waiting to be extracted.
    #[error("nothing waiting")]
    Empty,
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
