//! Command scripts that drive a scheduler and record what happened.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{SchedulerConfig, DEFAULT_MAX_LABEL_LEN};
use crate::core::{Entity, EntityId, Priority, TriageScheduler};
use crate::runtime::{HistoryReport, WaitingReport};

/// Errors raised by the script driver before the scheduler is involved.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// Label exceeds the configured byte limit.
    #[error("label too long: {len} bytes (max {max})")]
    LabelTooLong {
        /// Actual length in bytes.
        len: usize,
        /// Configured limit.
        max: usize,
    },
    /// Script text could not be parsed.
    #[error("script parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One step of a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Admit a new entity.
    Admit {
        /// Label of the new entity.
        label: String,
        /// Priority of the new entity.
        priority: Priority,
    },
    /// Serve the most urgent waiting entity.
    Serve,
    /// Report the waiting list.
    ViewWaiting,
    /// Report the history log.
    ViewHistory,
}

/// Ordered list of commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Commands in execution order.
    pub commands: Vec<Command>,
}

impl Script {
    /// Parse a script from JSON, e.g. `{"commands":[{"op":"serve"}]}`.
    pub fn from_json_str(input: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(input)?)
    }

    /// The intake-desk walkthrough: four arrivals out of order, two served,
    /// a critical late arrival, then the pool is drained past empty.
    pub fn emergency_room_demo() -> Self {
        let admit = |label: &str, priority| Command::Admit {
            label: label.to_string(),
            priority,
        };
        Self {
            commands: vec![
                admit("Ravi Kumar (Stable Condition)", 3),
                admit("Sita Sharma (Critical Injury)", 1),
                admit("Amit Patel (Urgent Care)", 2),
                admit("Priya Singh (Minor Issue)", 4),
                Command::ViewWaiting,
                Command::Serve,
                Command::Serve,
                Command::ViewWaiting,
                admit("John Doe (Head Trauma)", 1),
                Command::ViewWaiting,
                Command::Serve,
                Command::Serve,
                Command::Serve,
                Command::Serve,
                Command::ViewHistory,
            ],
        }
    }
}

/// Something observable that happened while running a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptEvent {
    /// An entity entered the waiting pool.
    Admitted(Entity),
    /// The waiting pool was full; the id was consumed anyway.
    AdmitRejected {
        /// Id consumed by the rejected admission.
        id: EntityId,
        /// Rejected label.
        label: String,
        /// Rejected priority.
        priority: Priority,
    },
    /// An entity was released for service.
    Served {
        /// The served entity.
        entity: Entity,
        /// Whether the history log recorded it.
        recorded: bool,
    },
    /// A serve found the waiting pool empty.
    NothingToServe,
    /// Waiting-list snapshot.
    Waiting(WaitingReport),
    /// History snapshot.
    History(HistoryReport),
}

impl fmt::Display for ScriptEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admitted(entity) => write!(
                f,
                "NEW PATIENT: '{}' added to waiting list with priority {}.",
                entity.label(),
                entity.priority()
            ),
            Self::AdmitRejected { .. } => {
                write!(f, "Error: Waiting list is full. Cannot add more patients.")
            }
            Self::Served { entity, recorded } => {
                write!(f, "TREATING NEXT PATIENT:\n  {entity}")?;
                if !recorded {
                    write!(f, "\nWarning: Treated log is full.")?;
                }
                Ok(())
            }
            Self::NothingToServe => {
                write!(f, "SYSTEM: No patients in the waiting list to treat.")
            }
            Self::Waiting(report) => fmt::Display::fmt(report, f),
            Self::History(report) => fmt::Display::fmt(report, f),
        }
    }
}

/// Executes scripts against a scheduler, validating input at the boundary.
#[derive(Debug, Clone, Copy)]
pub struct ScriptRunner {
    max_label_len: usize,
}

impl ScriptRunner {
    /// Runner rejecting labels longer than `max_label_len` bytes.
    pub const fn new(max_label_len: usize) -> Self {
        Self { max_label_len }
    }

    /// Runner using the label limit from configuration.
    pub const fn from_config(cfg: &SchedulerConfig) -> Self {
        Self::new(cfg.max_label_len)
    }

    /// Run every command in order and return the resulting events.
    ///
    /// Stops at the first label that fails validation; commands before it
    /// have already been applied.
    pub fn run(
        &self,
        scheduler: &mut TriageScheduler,
        script: &Script,
    ) -> Result<Vec<ScriptEvent>, ScriptError> {
        tracing::info!("running script with {} commands", script.commands.len());
        script
            .commands
            .iter()
            .map(|command| self.step(scheduler, command))
            .collect()
    }

    /// Apply a single command.
    pub fn step(
        &self,
        scheduler: &mut TriageScheduler,
        command: &Command,
    ) -> Result<ScriptEvent, ScriptError> {
        let event = match command {
            Command::Admit { label, priority } => {
                if label.len() > self.max_label_len {
                    return Err(ScriptError::LabelTooLong {
                        len: label.len(),
                        max: self.max_label_len,
                    });
                }
                let id = scheduler.next_id();
                match scheduler.admit(label.as_str(), *priority) {
                    Ok(entity) => ScriptEvent::Admitted(entity),
                    Err(_) => ScriptEvent::AdmitRejected {
                        id,
                        label: label.clone(),
                        priority: *priority,
                    },
                }
            }
            Command::Serve => match scheduler.try_serve() {
                Ok(served) => ScriptEvent::Served {
                    entity: served.entity,
                    recorded: served.recorded,
                },
                Err(_) => ScriptEvent::NothingToServe,
            },
            Command::ViewWaiting => ScriptEvent::Waiting(WaitingReport::from_scheduler(scheduler)),
            Command::ViewHistory => ScriptEvent::History(HistoryReport::from_scheduler(scheduler)),
        };
        Ok(event)
    }
}

impl Default for ScriptRunner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LABEL_LEN)
    }
}

/// Render events as a console transcript, one block per event.
pub fn render_transcript(events: &[ScriptEvent]) -> String {
    events
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
