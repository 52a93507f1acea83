use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};
use crate::id::Id;
use crate::set::IdSet;

/// A capacity-bounded collection of object ids owned by a player.
///
/// Adding beyond the configured maximum fails without mutating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    objects: IdSet,
    capacity: usize,
}

impl Inventory {
    /// Create an empty inventory with the given maximum size.
    pub fn new(capacity: usize) -> Self {
        Self {
            objects: IdSet::new(),
            capacity,
        }
    }

    /// The configured maximum number of objects.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Add an object id. Fails when the inventory is full, on the
    /// sentinel id, and on duplicates.
    pub fn add(&mut self, id: Id) -> WorldResult<()> {
        if self.objects.len() >= self.capacity {
            return Err(WorldError::InventoryFull {
                capacity: self.capacity,
            });
        }
        self.objects.add(id)
    }

    /// Remove an object id. Fails if it is absent.
    pub fn remove(&mut self, id: Id) -> WorldResult<()> {
        self.objects.remove(id)
    }

    /// Returns true if the inventory holds the object.
    pub fn contains(&self, id: Id) -> bool {
        self.objects.contains(id)
    }

    /// Number of objects held.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if nothing is held.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The object id at a position, or [`Id::NONE`] when out of range.
    pub fn get(&self, index: usize) -> Id {
        self.objects.get(index)
    }

    /// Iterate over the held object ids in storage order.
    pub fn iter(&self) -> impl Iterator<Item = Id> + '_ {
        self.objects.iter()
    }
}
