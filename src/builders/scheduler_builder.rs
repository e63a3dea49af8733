//! Builders to construct schedulers from configuration.

use anyhow::anyhow;

use crate::config::SchedulerConfig;
use crate::core::{AppResult, SharedScheduler, TriageScheduler};

/// Build a scheduler from validated configuration.
pub fn build_scheduler(cfg: &SchedulerConfig) -> AppResult<TriageScheduler> {
    cfg.validate()
        .map_err(|e| anyhow!("scheduler config invalid: {e}"))?;

    tracing::info!(
        capacity = cfg.capacity,
        history_capacity = cfg.history_capacity(),
        "building triage scheduler"
    );
    Ok(TriageScheduler::with_capacities(
        cfg.capacity,
        cfg.history_capacity(),
    ))
}

/// Build a scheduler and wrap it in a [`SharedScheduler`] handle.
pub fn build_shared_scheduler(cfg: &SchedulerConfig) -> AppResult<SharedScheduler> {
    build_scheduler(cfg).map(SharedScheduler::new)
}
