use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};
use crate::id::Id;
use crate::inventory::Inventory;

/// Width of a player's graphical tile.
pub const PLAYER_TILE_COLS: usize = 3;

/// Health value of a player the loader has not initialized yet.
pub const UNSET_PLAYER_HEALTH: i32 = -1;

/// One human turn-slot in the game.
///
/// Unlike characters, a player's location is stored here and is
/// authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    id: Id,
    name: String,
    location: Id,
    backpack: Inventory,
    health: i32,
    tile: String,
}

impl Player {
    /// Create a player with an empty backpack of the given capacity,
    /// no location, and uninitialized health.
    pub fn new(id: Id, name: impl Into<String>, backpack_capacity: usize) -> WorldResult<Self> {
        if id.is_none() {
            return Err(WorldError::NoneId);
        }
        Ok(Self {
            id,
            name: name.into(),
            location: Id::NONE,
            backpack: Inventory::new(backpack_capacity),
            health: UNSET_PLAYER_HEALTH,
            tile: " ".repeat(PLAYER_TILE_COLS),
        })
    }

    /// The player's unique id.
    pub fn id(&self) -> Id {
        self.id
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The space the player stands in.
    pub fn location(&self) -> Id {
        self.location
    }

    /// Move the player. The sentinel id is refused.
    pub fn set_location(&mut self, location: Id) -> WorldResult<()> {
        if location.is_none() {
            return Err(WorldError::NoneId);
        }
        self.location = location;
        Ok(())
    }

    /// The player's backpack.
    pub fn backpack(&self) -> &Inventory {
        &self.backpack
    }

    /// Mutable access to the backpack.
    pub fn backpack_mut(&mut self) -> &mut Inventory {
        &mut self.backpack
    }

    /// Current health points ([`UNSET_PLAYER_HEALTH`] before loading).
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Set health. Negative values are refused and leave health unchanged.
    pub fn set_health(&mut self, health: i32) -> WorldResult<()> {
        if health < 0 {
            return Err(WorldError::NegativeHealth(health));
        }
        self.health = health;
        Ok(())
    }

    /// The graphical tile, always [`PLAYER_TILE_COLS`] wide.
    pub fn tile(&self) -> &str {
        &self.tile
    }

    /// Replace the tile. The text must be exactly
    /// [`PLAYER_TILE_COLS`] columns.
    pub fn set_tile(&mut self, tile: &str) -> WorldResult<()> {
        let got = tile.chars().count();
        if got != PLAYER_TILE_COLS {
            return Err(WorldError::BadTileWidth {
                expected: PLAYER_TILE_COLS,
                got,
            });
        }
        self.tile = tile.to_string();
        Ok(())
    }
}
