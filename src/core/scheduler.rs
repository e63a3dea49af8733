//! Scheduler façade composing the waiting heap and the history log.

use crate::core::{BoundedMinHeap, Entity, EntityId, HistoryLog, Priority, SchedulerError};

/// Outcome of a successful [`TriageScheduler::try_serve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Served {
    /// The entity released for service.
    pub entity: Entity,
    /// Whether the entity was recorded in the history log. `false` means the
    /// log was full; the entity is still considered served.
    pub recorded: bool,
}

/// Admission-priority scheduler for a single-resource service.
///
/// Owns the waiting heap, the history log and the id counter. Behaviour is
/// fully determined by the heap size, the log size and `next_id`.
///
/// # Known quirk
///
/// [`admit`](Self::admit) consumes an id before attempting the insert, so a
/// rejected admission still advances `next_id`. Ids are therefore unique and
/// monotonic but not necessarily contiguous.
#[derive(Debug, Clone)]
pub struct TriageScheduler {
    waiting: BoundedMinHeap,
    history: HistoryLog,
    next_id: EntityId,
}

impl TriageScheduler {
    /// Create a scheduler whose heap and log both hold `capacity` entities.
    pub fn new(capacity: usize) -> Self {
        Self::with_capacities(capacity, capacity)
    }

    /// Create a scheduler with separate waiting and history capacities.
    pub fn with_capacities(waiting_capacity: usize, history_capacity: usize) -> Self {
        Self {
            waiting: BoundedMinHeap::new(waiting_capacity),
            history: HistoryLog::new(history_capacity),
            next_id: 1,
        }
    }

    /// Admit a new entity into the waiting pool.
    ///
    /// Returns a copy of the admitted record. On
    /// [`SchedulerError::CapacityExceeded`] the entity is discarded but its id
    /// stays consumed.
    pub fn admit(
        &mut self,
        label: impl Into<String>,
        priority: Priority,
    ) -> Result<Entity, SchedulerError> {
        let id = self.next_id;
        self.next_id += 1;

        let entity = Entity::new(id, label, priority);
        let admitted = entity.clone();
        if let Err(e) = self.waiting.insert(entity) {
            tracing::warn!(
                id,
                priority,
                capacity = self.waiting.capacity(),
                "waiting list full, admission rejected"
            );
            return Err(e);
        }
        tracing::debug!("entity {} admitted with priority {}", id, priority);
        Ok(admitted)
    }

    /// Release the most urgent waiting entity, or `None` if nothing waits.
    pub fn serve(&mut self) -> Option<Entity> {
        self.try_serve().ok().map(|served| served.entity)
    }

    /// Like [`serve`](Self::serve), but reports an empty pool as
    /// [`SchedulerError::Empty`] and exposes whether history recorded it.
    pub fn try_serve(&mut self) -> Result<Served, SchedulerError> {
        let entity = self.waiting.extract_min()?;
        let recorded = match self.history.append(entity.clone()) {
            Ok(()) => true,
            Err(_) => {
                tracing::warn!("history log full, entity {} served unrecorded", entity.id());
                false
            }
        };
        tracing::debug!("entity {} served", entity.id());
        Ok(Served { entity, recorded })
    }

    /// The entity that would be served next, without removing it.
    pub fn peek_next(&self) -> Option<&Entity> {
        self.waiting.peek()
    }

    /// Served entities in service order.
    pub fn history(&self) -> &[Entity] {
        self.history.entries()
    }

    /// Waiting entities in heap array order. Only the first is meaningful.
    pub fn waiting(&self) -> &[Entity] {
        self.waiting.as_slice()
    }

    /// Number of entities waiting.
    pub fn waiting_len(&self) -> usize {
        self.waiting.len()
    }

    /// Capacity of the waiting pool.
    pub const fn capacity(&self) -> usize {
        self.waiting.capacity()
    }

    /// Capacity of the history log.
    pub const fn history_capacity(&self) -> usize {
        self.history.capacity()
    }

    /// Id the next admission will receive.
    pub const fn next_id(&self) -> EntityId {
        self.next_id
    }
}
