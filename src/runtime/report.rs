//! Text rendering of the waiting list and the treated log.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Entity, TriageScheduler};

/// Snapshot of the waiting pool: how many wait and who is next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitingReport {
    /// Number of waiting entities.
    pub total: usize,
    /// Entity at the root of the heap.
    pub next: Option<Entity>,
}

impl WaitingReport {
    /// Capture the scheduler's current waiting state.
    pub fn from_scheduler(scheduler: &TriageScheduler) -> Self {
        Self {
            total: scheduler.waiting_len(),
            next: scheduler.peek_next().cloned(),
        }
    }
}

impl fmt::Display for WaitingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Current Waiting List ---")?;
        match &self.next {
            None => writeln!(f, "  (The waiting list is empty)")?,
            Some(next) => {
                writeln!(f, "  Total patients waiting: {}", self.total)?;
                writeln!(f, "  Next to be treated: {next}")?;
            }
        }
        write!(f, "--------------------------")
    }
}

/// Snapshot of the history log in service order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryReport {
    /// Served entities, oldest first.
    pub entries: Vec<Entity>,
}

impl HistoryReport {
    /// Capture the scheduler's current history.
    pub fn from_scheduler(scheduler: &TriageScheduler) -> Self {
        Self {
            entries: scheduler.history().to_vec(),
        }
    }
}

impl fmt::Display for HistoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Log of Treated Patients ---")?;
        if self.entries.is_empty() {
            writeln!(f, "  (No patients have been treated yet)")?;
        }
        for entry in &self.entries {
            writeln!(f, "  {entry}")?;
        }
        write!(f, "-----------------------------")
    }
}
