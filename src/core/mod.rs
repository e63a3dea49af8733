//! Core scheduling abstractions: entities, the bounded heap, the history log
//! and the scheduler façade.

pub mod entity;
pub mod error;
pub mod heap;
pub mod history;
pub mod scheduler;
pub mod shared;

pub use entity::{Entity, EntityId, Priority};
pub use error::{AppResult, SchedulerError};
pub use heap::BoundedMinHeap;
pub use history::HistoryLog;
pub use scheduler::{Served, TriageScheduler};
pub use shared::SharedScheduler;
