//! # Triage Scheduler
//!
//! An admission-priority scheduler for a single-resource service such as an
//! emergency intake desk.
//!
//! Entities arrive with an integer priority (lower is more urgent), wait in a
//! bounded pool, and are released one at a time in priority order. Every
//! served entity is appended to a bounded history log.
//!
//! ## Core
//!
//! - [`core::BoundedMinHeap`]: fixed-capacity, array-backed binary min-heap
//!   with sift-up on insert and sift-down on extraction.
//! - [`core::HistoryLog`]: append-only record of served entities.
//! - [`core::TriageScheduler`]: façade that assigns ids and exposes
//!   `admit`, `serve`, `peek_next` and `history`.
//!
//! Capacity exhaustion and empty pools are reported through
//! [`core::SchedulerError`]; neither is fatal.
//!
//! ```rust
//! use triage_scheduler::core::{SchedulerError, TriageScheduler};
//!
//! let mut desk = TriageScheduler::new(3);
//! desk.admit("Ravi Kumar", 3)?;
//! desk.admit("Sita Sharma", 1)?;
//! desk.admit("Amit Patel", 2)?;
//!
//! assert_eq!(desk.serve().map(|e| e.priority()), Some(1));
//! assert_eq!(desk.peek_next().map(|e| e.priority()), Some(2));
//! assert_eq!(desk.history().len(), 1);
//! # Ok::<(), SchedulerError>(())
//! ```
//!
//! Equal priorities leave in an unspecified order. A rejected admission
//! still consumes an id.
//!
//! ## Around the core
//!
//! - [`config::SchedulerConfig`]: capacities and label limit from JSON or the
//!   environment.
//! - [`builders`]: turn configuration into schedulers.
//! - [`core::SharedScheduler`]: one mutex around one scheduler, for callers
//!   on several threads.
//! - [`runtime`]: command scripts and console-style reports.

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Entities, the bounded heap, the history log and the scheduler façade.
pub mod core;
/// Configuration models for the scheduler and its driver.
pub mod config;
/// Builders to construct schedulers from configuration.
pub mod builders;
/// Script driver and text reports.
pub mod runtime;
/// Shared utilities.
pub mod util;
