use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::{WorldError, WorldResult};
use crate::id::Id;

/// A directed, named connection between two spaces.
///
/// At most one link exists per (origin, direction) pair; the registry's
/// lookups return the first match. A link is one-way; the reverse
/// direction exists only if the data encodes a second link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    id: Id,
    name: String,
    origin: Id,
    destination: Id,
    direction: Direction,
    open: bool,
}

impl Link {
    /// Create a link. The id, origin, and destination must be real ids.
    pub fn new(
        id: Id,
        name: impl Into<String>,
        origin: Id,
        destination: Id,
        direction: Direction,
        open: bool,
    ) -> WorldResult<Self> {
        if id.is_none() || origin.is_none() || destination.is_none() {
            return Err(WorldError::NoneId);
        }
        Ok(Self {
            id,
            name: name.into(),
            origin,
            destination,
            direction,
            open,
        })
    }

    /// The link's unique id.
    pub fn id(&self) -> Id {
        self.id
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The space this link leaves from.
    pub fn origin(&self) -> Id {
        self.origin
    }

    /// The space this link arrives at.
    pub fn destination(&self) -> Id {
        self.destination
    }

    /// The cardinal direction of travel.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the link can currently be traversed.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open or close the link.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}
