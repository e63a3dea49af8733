//! Thread-safe handle around a single scheduler instance.
//!
//! The scheduler itself is single-threaded. Integrators that need to reach it
//! from several threads go through [`SharedScheduler`], which guards the whole
//! façade with one `parking_lot::Mutex` per instance.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::{Entity, Priority, SchedulerError, Served, TriageScheduler};

/// Cloneable handle sharing one [`TriageScheduler`] behind a mutex.
#[derive(Debug, Clone)]
pub struct SharedScheduler {
    inner: Arc<Mutex<TriageScheduler>>,
}

impl SharedScheduler {
    /// Wrap an existing scheduler.
    pub fn new(scheduler: TriageScheduler) -> Self {
        Self {
            inner: Arc::new(Mutex::new(scheduler)),
        }
    }

    /// See [`TriageScheduler::admit`].
    pub fn admit(
        &self,
        label: impl Into<String>,
        priority: Priority,
    ) -> Result<Entity, SchedulerError> {
        self.inner.lock().admit(label, priority)
    }

    /// See [`TriageScheduler::serve`].
    pub fn serve(&self) -> Option<Entity> {
        self.inner.lock().serve()
    }

    /// See [`TriageScheduler::try_serve`].
    pub fn try_serve(&self) -> Result<Served, SchedulerError> {
        self.inner.lock().try_serve()
    }

    /// Copy of the next entity to be served.
    pub fn peek_next(&self) -> Option<Entity> {
        self.inner.lock().peek_next().cloned()
    }

    /// Snapshot of the history log.
    pub fn history(&self) -> Vec<Entity> {
        self.inner.lock().history().to_vec()
    }

    /// Number of entities waiting.
    pub fn waiting_len(&self) -> usize {
        self.inner.lock().waiting_len()
    }

    /// Run several operations under one lock acquisition.
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut TriageScheduler) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<TriageScheduler> for SharedScheduler {
    fn from(scheduler: TriageScheduler) -> Self {
        Self::new(scheduler)
    }
}
