use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};
use crate::id::Id;

/// A small collection of unique entity ids.
///
/// Backs inventories and per-space occupancy. Removal swaps the last
/// element into the vacated slot, so iteration order is not preserved
/// across removals. Duplicate adds are an error, not a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSet {
    ids: Vec<Id>,
}

impl IdSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an id to the set.
    ///
    /// Fails on the sentinel id and on ids already present.
    pub fn add(&mut self, id: Id) -> WorldResult<()> {
        if id.is_none() {
            return Err(WorldError::NoneId);
        }
        if self.contains(id) {
            return Err(WorldError::DuplicateId(id));
        }
        self.ids.push(id);
        Ok(())
    }

    /// Remove an id from the set. Fails if it is absent.
    pub fn remove(&mut self, id: Id) -> WorldResult<()> {
        match self.ids.iter().position(|&other| other == id) {
            Some(index) => {
                self.ids.swap_remove(index);
                Ok(())
            }
            None => Err(WorldError::MissingId(id)),
        }
    }

    /// Returns true if the id is in the set.
    pub fn contains(&self, id: Id) -> bool {
        self.ids.contains(&id)
    }

    /// Number of ids in the set.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if the set holds no ids.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The id at a position, or [`Id::NONE`] when out of range.
    pub fn get(&self, index: usize) -> Id {
        self.ids.get(index).copied().unwrap_or(Id::NONE)
    }

    /// Iterate over the ids in storage order.
    pub fn iter(&self) -> impl Iterator<Item = Id> + '_ {
        self.ids.iter().copied()
    }
}
