//! Entity records held by the waiting pool and the history log.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned by the scheduler, monotonic from 1.
pub type EntityId = u64;

/// Urgency score. Smaller values are served sooner.
pub type Priority = i32;

/// A single admitted entity.
///
/// Fields are read-only once constructed; the record moves from the heap to
/// the history log but is never modified in between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    id: EntityId,
    label: String,
    priority: Priority,
}

impl Entity {
    /// Create a new entity record.
    pub fn new(id: EntityId, label: impl Into<String>, priority: Priority) -> Self {
        Self {
            id,
            label: label.into(),
            priority,
        }
    }

    /// Identifier assigned at admission.
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Human-readable label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Priority used for heap ordering.
    pub const fn priority(&self) -> Priority {
        self.priority
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Priority: {}",
            self.id, self.label, self.priority
        )
    }
}
