//! Append-only log of served entities.

use crate::core::{Entity, SchedulerError};

/// Bounded record of every served entity, in service order.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    capacity: usize,
    entries: Vec<Entity>,
}

impl HistoryLog {
    /// Create an empty log holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Record a served entity.
    ///
    /// On [`SchedulerError::CapacityExceeded`] the entity is dropped. It has
    /// already left the waiting pool, so callers should treat this as a
    /// warning rather than a failed serve.
    pub fn append(&mut self, entity: Entity) -> Result<(), SchedulerError> {
        if self.is_full() {
            return Err(SchedulerError::CapacityExceeded);
        }
        self.entries.push(entity);
        Ok(())
    }

    /// Served entities in the order they were served.
    pub fn entries(&self) -> &[Entity] {
        &self.entries
    }

    /// Number of recorded entities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fixed capacity chosen at construction.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether another append would fail.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }
}
