//! Fixed-capacity binary min-heap over entity records.

use crate::core::{Entity, SchedulerError};

/// Array-backed binary min-heap ordered by [`Entity::priority`].
///
/// The backing storage is allocated once with the requested capacity and is
/// never grown: inserting into a full heap reports
/// [`SchedulerError::CapacityExceeded`] instead of reallocating.
///
/// # Ties
///
/// Entities with equal priority leave in an unspecified relative order. The
/// heap is not stable and does not guarantee FIFO among equal priorities.
#[derive(Debug, Clone)]
pub struct BoundedMinHeap {
    capacity: usize,
    slots: Vec<Entity>,
}

impl BoundedMinHeap {
    /// Create an empty heap holding at most `capacity` entities.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Insert an entity and restore heap order with a sift-up pass.
    ///
    /// Fails without touching the heap when it is already full. O(log n).
    pub fn insert(&mut self, entity: Entity) -> Result<(), SchedulerError> {
        if self.is_full() {
            return Err(SchedulerError::CapacityExceeded);
        }
        self.slots.push(entity);
        self.sift_up(self.slots.len() - 1);
        debug_assert!(self.is_heap_ordered());
        Ok(())
    }

    /// Remove and return the entity with the smallest priority. O(log n).
    pub fn extract_min(&mut self) -> Result<Entity, SchedulerError> {
        match self.slots.len() {
            0 => Err(SchedulerError::Empty),
            1 => self.slots.pop().ok_or(SchedulerError::Empty),
            _ => {
                // swap_remove moves the last element into slot 0
                let root = self.slots.swap_remove(0);
                self.sift_down(0);
                debug_assert!(self.is_heap_ordered());
                Ok(root)
            }
        }
    }

    /// The entity that would be extracted next.
    pub fn peek(&self) -> Option<&Entity> {
        self.slots.first()
    }

    /// Number of entities currently held.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the heap holds no entities.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Fixed capacity chosen at construction.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether another insert would fail.
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Entities in array (heap) order. Only index 0 has a defined meaning.
    pub fn as_slice(&self) -> &[Entity] {
        &self.slots
    }

    /// Check that every parent's priority is <= each in-range child's.
    pub fn is_heap_ordered(&self) -> bool {
        (1..self.slots.len())
            .all(|child| self.slots[(child - 1) / 2].priority() <= self.slots[child].priority())
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.slots[index].priority() >= self.slots[parent].priority() {
                break;
            }
            self.slots.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.slots[left].priority() < self.slots[smallest].priority() {
                smallest = left;
            }
            if right < len && self.slots[right].priority() < self.slots[smallest].priority() {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.slots.swap(index, smallest);
            index = smallest;
        }
    }
}
