use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};
use crate::id::Id;

/// A physical object in the world.
///
/// The location is a space id while the object lies somewhere, and
/// [`Id::NONE`] while a player carries it. The `dependency` and `opens`
/// fields come from the save file and are exposed to callers but not
/// enforced by any command handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Object {
    id: Id,
    name: String,
    description: String,
    location: Id,
    health: i32,
    movable: bool,
    dependency: Id,
    opens: Id,
}

impl Object {
    /// Create an object with no location, description, or links to other
    /// objects.
    pub fn new(id: Id, name: impl Into<String>) -> WorldResult<Self> {
        if id.is_none() {
            return Err(WorldError::NoneId);
        }
        Ok(Self {
            id,
            name: name.into(),
            description: String::new(),
            location: Id::NONE,
            health: 0,
            movable: false,
            dependency: Id::NONE,
            opens: Id::NONE,
        })
    }

    /// The object's unique id.
    pub fn id(&self) -> Id {
        self.id
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The free-text description shown by INSPECT.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// The space holding the object, or [`Id::NONE`] while carried.
    pub fn location(&self) -> Id {
        self.location
    }

    /// Move the object to a space, or to [`Id::NONE`] when picked up.
    pub fn set_location(&mut self, location: Id) {
        self.location = location;
    }

    /// Health of the object (used by breakable objects).
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Set the object's health.
    pub fn set_health(&mut self, health: i32) {
        self.health = health;
    }

    /// Whether the object can be carried.
    pub fn movable(&self) -> bool {
        self.movable
    }

    /// Set whether the object can be carried.
    pub fn set_movable(&mut self, movable: bool) {
        self.movable = movable;
    }

    /// Id of an object required to interact with this one.
    pub fn dependency(&self) -> Id {
        self.dependency
    }

    /// Set the dependency object id.
    pub fn set_dependency(&mut self, dependency: Id) {
        self.dependency = dependency;
    }

    /// Id of the object or lock this object opens.
    pub fn opens(&self) -> Id {
        self.opens
    }

    /// Set the id this object opens.
    pub fn set_opens(&mut self, opens: Id) {
        self.opens = opens;
    }
}
