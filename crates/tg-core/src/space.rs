use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};
use crate::id::Id;
use crate::set::IdSet;

/// Number of rows in a space's graphical tile.
pub const TILE_ROWS: usize = 5;
/// Width of every row in a space's graphical tile.
pub const TILE_COLS: usize = 20;

/// A location node in the world graph.
///
/// Spaces never reference other spaces; connectivity lives on
/// [`Link`](crate::link::Link)s. The character set on a space is the single
/// source of truth for where characters are; characters themselves store
/// no location. Object presence is derived from object locations through
/// [`Game::objects_in`](crate::game::Game::objects_in) and is not stored
/// here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Space {
    id: Id,
    name: String,
    tile: [String; TILE_ROWS],
    discovered: bool,
    characters: IdSet,
}

impl Space {
    /// Create a space with a blank tile and no occupants.
    pub fn new(id: Id, name: impl Into<String>) -> WorldResult<Self> {
        if id.is_none() {
            return Err(WorldError::NoneId);
        }
        Ok(Self {
            id,
            name: name.into(),
            tile: std::array::from_fn(|_| " ".repeat(TILE_COLS)),
            discovered: false,
            characters: IdSet::new(),
        })
    }

    /// The space's unique id.
    pub fn id(&self) -> Id {
        self.id
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One row of the graphical tile, always [`TILE_COLS`] wide.
    pub fn tile_row(&self, row: usize) -> &str {
        self.tile.get(row).map(String::as_str).unwrap_or("")
    }

    /// Replace one row of the tile, blank-padding or truncating to
    /// [`TILE_COLS`] columns.
    pub fn set_tile_row(&mut self, row: usize, text: &str) -> WorldResult<()> {
        let Some(slot) = self.tile.get_mut(row) else {
            return Err(WorldError::BadTileRow {
                rows: TILE_ROWS,
                row,
            });
        };
        let mut padded: String = text.chars().take(TILE_COLS).collect();
        while padded.chars().count() < TILE_COLS {
            padded.push(' ');
        }
        *slot = padded;
        Ok(())
    }

    /// Whether any player has ever entered this space.
    pub fn discovered(&self) -> bool {
        self.discovered
    }

    /// Mark the space discovered. The flag never resets.
    pub fn mark_discovered(&mut self) {
        self.discovered = true;
    }

    /// The ids of the characters currently in this space.
    pub fn characters(&self) -> &IdSet {
        &self.characters
    }

    /// Put a character into this space.
    pub fn add_character(&mut self, id: Id) -> WorldResult<()> {
        self.characters.add(id)
    }

    /// Take a character out of this space.
    pub fn remove_character(&mut self, id: Id) -> WorldResult<()> {
        self.characters.remove(id)
    }
}
