use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};
use crate::id::Id;

/// Width of a character's graphical tile.
pub const CHARACTER_TILE_COLS: usize = 6;

/// Default health for a freshly created character.
pub const DEFAULT_CHARACTER_HEALTH: i32 = 100;

/// A non-player character.
///
/// Characters store no location of their own; the space occupancy sets are
/// the single source of truth, queried through
/// [`Game::locate_character`](crate::game::Game::locate_character).
///
/// Invariant: only a friendly character may follow a player. Turning a
/// character hostile clears its following id, and `set_following` on a
/// hostile character refuses and clears.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    id: Id,
    name: String,
    tile: String,
    health: i32,
    friendly: bool,
    message: String,
    following: Id,
}

impl Character {
    /// Create a friendly character with default health and a blank tile.
    pub fn new(id: Id, name: impl Into<String>) -> WorldResult<Self> {
        if id.is_none() {
            return Err(WorldError::NoneId);
        }
        Ok(Self {
            id,
            name: name.into(),
            tile: " ".repeat(CHARACTER_TILE_COLS),
            health: DEFAULT_CHARACTER_HEALTH,
            friendly: true,
            message: String::new(),
            following: Id::NONE,
        })
    }

    /// The character's unique id.
    pub fn id(&self) -> Id {
        self.id
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The graphical tile, always [`CHARACTER_TILE_COLS`] wide.
    pub fn tile(&self) -> &str {
        &self.tile
    }

    /// Replace the tile. The text must be exactly
    /// [`CHARACTER_TILE_COLS`] columns.
    pub fn set_tile(&mut self, tile: &str) -> WorldResult<()> {
        let got = tile.chars().count();
        if got != CHARACTER_TILE_COLS {
            return Err(WorldError::BadTileWidth {
                expected: CHARACTER_TILE_COLS,
                got,
            });
        }
        self.tile = tile.to_string();
        Ok(())
    }

    /// Current health points.
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

    /// Whether the character is friendly to players.
    pub fn friendly(&self) -> bool {
        self.friendly
    }

    /// Set friendliness. Turning hostile clears the following id.
    pub fn set_friendly(&mut self, friendly: bool) {
        self.friendly = friendly;
        if !friendly {
            self.following = Id::NONE;
        }
    }

    /// The message a friendly character speaks when chatted with.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replace the chat message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// The player this character follows, or [`Id::NONE`].
    pub fn following(&self) -> Id {
        self.following
    }

    /// Attach the character to a player (or detach with [`Id::NONE`]).
    ///
    /// Refused on a hostile character; the field is cleared in that case
    /// so the invariant holds regardless.
    pub fn set_following(&mut self, player: Id) -> WorldResult<()> {
        if self.friendly {
            self.following = player;
            Ok(())
        } else {
            self.following = Id::NONE;
            Err(WorldError::HostileFollower)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_character_defaults() {
        let character = Character::new(Id::new(1), "Warden").unwrap();
        assert_eq!(character.health(), DEFAULT_CHARACTER_HEALTH);
        assert!(character.friendly());
        assert_eq!(character.following(), Id::NONE);
        assert_eq!(character.tile().len(), CHARACTER_TILE_COLS);
    }

    #[test]
    fn tile_width_is_enforced() {
        let mut character = Character::new(Id::new(1), "Warden").unwrap();
        assert!(character.set_tile("^0m").is_err());
        character.set_tile("/o_o\\!").unwrap();
        assert_eq!(character.tile(), "/o_o\\!");
    }

    #[test]
    fn negative_health_is_refused() {
        let mut character = Character::new(Id::new(1), "Warden").unwrap();
        character.set_health(10).unwrap();
        assert!(character.set_health(-5).is_err());
        assert_eq!(character.health(), 10);
        character.set_health(0).unwrap();
        assert_eq!(character.health(), 0);
    }

    #[test]
    fn hostile_character_cannot_follow() {
        let mut character = Character::new(Id::new(1), "Ghoul").unwrap();
        character.set_friendly(false);
        assert!(character.set_following(Id::new(7)).is_err());
        assert_eq!(character.following(), Id::NONE);
    }

    #[test]
    fn turning_hostile_clears_following() {
        let mut character = Character::new(Id::new(1), "Squire").unwrap();
        character.set_following(Id::new(7)).unwrap();
        assert_eq!(character.following(), Id::new(7));
        character.set_friendly(false);
        assert_eq!(character.following(), Id::NONE);
    }
}
