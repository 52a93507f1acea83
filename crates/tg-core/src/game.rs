use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::command::Command;
use crate::direction::Direction;
use crate::error::{WorldError, WorldResult};
use crate::id::Id;
use crate::link::Link;
use crate::object::Object;
use crate::player::Player;
use crate::space::Space;

/// Per-player presentation state: the last command issued and the last
/// message received (from CHAT or INSPECT).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerInterface {
    last_command: Command,
    last_message: String,
}

impl PlayerInterface {
    /// The last command this player issued, with its outcome.
    pub fn last_command(&self) -> &Command {
        &self.last_command
    }

    /// The last chat or inspect message shown to this player.
    pub fn last_message(&self) -> &str {
        &self.last_message
    }
}

/// The world registry. Owns every entity for the duration of a run.
///
/// All other components borrow from the registry; entities are created at
/// load time and destroyed only when the registry is dropped. The `turn`
/// index selects the active player, and most of the single-player
/// accessors (location, last command, last message) act on that player.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    spaces: Vec<Space>,
    objects: Vec<Object>,
    characters: Vec<Character>,
    links: Vec<Link>,
    players: Vec<Player>,
    interfaces: Vec<PlayerInterface>,
    finished: bool,
    feedback: String,
    turn: usize,
}

impl Game {
    /// An empty world with no entities and the turn pointer at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Entity registration
    // -----------------------------------------------------------------------

    /// Add a space. Ids must be unique among spaces.
    pub fn add_space(&mut self, space: Space) -> WorldResult<()> {
        if self.space(space.id()).is_some() {
            return Err(WorldError::DuplicateEntity {
                kind: "space",
                id: space.id(),
            });
        }
        self.spaces.push(space);
        Ok(())
    }

    /// Add an object. Ids must be unique among objects.
    pub fn add_object(&mut self, object: Object) -> WorldResult<()> {
        if self.object(object.id()).is_some() {
            return Err(WorldError::DuplicateEntity {
                kind: "object",
                id: object.id(),
            });
        }
        self.objects.push(object);
        Ok(())
    }

    /// Add a character. Ids must be unique among characters. The character
    /// occupies no space until [`Game::move_character`] places it.
    pub fn add_character(&mut self, character: Character) -> WorldResult<()> {
        if self.character(character.id()).is_some() {
            return Err(WorldError::DuplicateEntity {
                kind: "character",
                id: character.id(),
            });
        }
        self.characters.push(character);
        Ok(())
    }

    /// Add a link. Ids must be unique among links.
    pub fn add_link(&mut self, link: Link) -> WorldResult<()> {
        if self.link(link.id()).is_some() {
            return Err(WorldError::DuplicateEntity {
                kind: "link",
                id: link.id(),
            });
        }
        self.links.push(link);
        Ok(())
    }

    /// Add a player together with its interface record.
    pub fn add_player(&mut self, player: Player) -> WorldResult<()> {
        if self.players.iter().any(|other| other.id() == player.id()) {
            return Err(WorldError::DuplicateEntity {
                kind: "player",
                id: player.id(),
            });
        }
        self.players.push(player);
        self.interfaces.push(PlayerInterface::default());
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Entity access
    // -----------------------------------------------------------------------

    /// All spaces in load order.
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// A space by id.
    pub fn space(&self, id: Id) -> Option<&Space> {
        if id.is_none() {
            return None;
        }
        self.spaces.iter().find(|space| space.id() == id)
    }

    /// A space by id, mutable.
    pub fn space_mut(&mut self, id: Id) -> Option<&mut Space> {
        if id.is_none() {
            return None;
        }
        self.spaces.iter_mut().find(|space| space.id() == id)
    }

    /// All objects in load order.
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// An object by id.
    pub fn object(&self, id: Id) -> Option<&Object> {
        if id.is_none() {
            return None;
        }
        self.objects.iter().find(|object| object.id() == id)
    }

    /// An object by id, mutable.
    pub fn object_mut(&mut self, id: Id) -> Option<&mut Object> {
        if id.is_none() {
            return None;
        }
        self.objects.iter_mut().find(|object| object.id() == id)
    }

    /// All characters in load order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// A character by id.
    pub fn character(&self, id: Id) -> Option<&Character> {
        if id.is_none() {
            return None;
        }
        self.characters.iter().find(|character| character.id() == id)
    }

    /// A character by id, mutable.
    pub fn character_mut(&mut self, id: Id) -> Option<&mut Character> {
        if id.is_none() {
            return None;
        }
        self.characters
            .iter_mut()
            .find(|character| character.id() == id)
    }

    /// All links in load order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// A link by id.
    pub fn link(&self, id: Id) -> Option<&Link> {
        if id.is_none() {
            return None;
        }
        self.links.iter().find(|link| link.id() == id)
    }

    /// All players in load order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// A player by turn slot.
    pub fn player(&self, slot: usize) -> Option<&Player> {
        self.players.get(slot)
    }

    /// The player whose turn it is.
    pub fn active_player(&self) -> Option<&Player> {
        self.players.get(self.turn)
    }

    /// The active player, mutable.
    pub fn active_player_mut(&mut self) -> Option<&mut Player> {
        self.players.get_mut(self.turn)
    }

    // -----------------------------------------------------------------------
    // Turn state
    // -----------------------------------------------------------------------

    /// The turn slot of the active player.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Select the active player. Fails on an out-of-range slot.
    pub fn set_turn(&mut self, turn: usize) -> WorldResult<()> {
        if turn >= self.players.len() {
            return Err(WorldError::UnknownPlayer(turn));
        }
        self.turn = turn;
        Ok(())
    }

    /// Whether the session is over.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Mark the session over (or not).
    pub fn set_finished(&mut self, finished: bool) {
        self.finished = finished;
    }

    /// The most recent transient narrative message.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// Overwrite the transient narrative message.
    pub fn set_feedback(&mut self, feedback: impl Into<String>) {
        self.feedback = feedback.into();
    }

    // -----------------------------------------------------------------------
    // Active-player interface
    // -----------------------------------------------------------------------

    /// The active player's location, or [`Id::NONE`] with no players.
    pub fn player_location(&self) -> Id {
        self.active_player().map(Player::location).unwrap_or(Id::NONE)
    }

    /// Move the active player. The sentinel id is refused.
    pub fn set_player_location(&mut self, location: Id) -> WorldResult<()> {
        if location.is_none() {
            return Err(WorldError::NoneId);
        }
        let turn = self.turn;
        match self.players.get_mut(turn) {
            Some(player) => player.set_location(location),
            None => Err(WorldError::UnknownPlayer(turn)),
        }
    }

    /// The active player's last command, if any player exists.
    pub fn last_command(&self) -> Option<&Command> {
        self.interfaces.get(self.turn).map(PlayerInterface::last_command)
    }

    /// Record the active player's last command.
    pub fn set_last_command(&mut self, command: Command) {
        if let Some(interface) = self.interfaces.get_mut(self.turn) {
            interface.last_command = command;
        }
    }

    /// The active player's last chat/inspect message.
    pub fn last_message(&self) -> &str {
        self.interfaces
            .get(self.turn)
            .map(PlayerInterface::last_message)
            .unwrap_or("")
    }

    /// Record a chat/inspect message for the active player.
    pub fn set_last_message(&mut self, message: impl Into<String>) {
        if let Some(interface) = self.interfaces.get_mut(self.turn) {
            interface.last_message = message.into();
        }
    }

    // -----------------------------------------------------------------------
    // Cross-entity queries
    // -----------------------------------------------------------------------

    /// The destination of the link leaving `origin` in `direction`, or
    /// [`Id::NONE`] when no such link exists.
    pub fn connection(&self, origin: Id, direction: Direction) -> Id {
        self.links
            .iter()
            .find(|link| link.origin() == origin && link.direction() == direction)
            .map(Link::destination)
            .unwrap_or(Id::NONE)
    }

    /// Whether the link leaving `origin` in `direction` is open.
    ///
    /// Returns false both for a closed link and for no link at all;
    /// callers that care about the difference check
    /// [`Game::connection`] first.
    pub fn connection_is_open(&self, origin: Id, direction: Direction) -> bool {
        self.links
            .iter()
            .find(|link| link.origin() == origin && link.direction() == direction)
            .map(Link::is_open)
            .unwrap_or(false)
    }

    /// The space holding a character, found by scanning every space's
    /// occupancy set, or [`Id::NONE`] when the character is nowhere.
    pub fn locate_character(&self, id: Id) -> Id {
        if id.is_none() {
            return Id::NONE;
        }
        self.spaces
            .iter()
            .find(|space| space.characters().contains(id))
            .map(Space::id)
            .unwrap_or(Id::NONE)
    }

    /// Move a character to a space, removing it from wherever it was.
    /// The destination must exist.
    pub fn move_character(&mut self, character: Id, destination: Id) -> WorldResult<()> {
        if character.is_none() {
            return Err(WorldError::NoneId);
        }
        if self.space(destination).is_none() {
            return Err(WorldError::UnknownSpace(destination));
        }
        let origin = self.locate_character(character);
        if let Some(space) = self.space_mut(origin) {
            let _ = space.remove_character(character);
        }
        if let Some(space) = self.space_mut(destination) {
            space.add_character(character)?;
        }
        Ok(())
    }

    /// The objects currently lying in a space, in load order.
    pub fn objects_in(&self, space: Id) -> impl Iterator<Item = &Object> {
        self.objects
            .iter()
            .filter(move |object| !space.is_none() && object.location() == space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_room_world() -> Game {
        let mut game = Game::new();
        game.add_space(Space::new(Id::new(1), "Hall").unwrap()).unwrap();
        game.add_space(Space::new(Id::new(2), "Crypt").unwrap()).unwrap();
        game.add_link(
            Link::new(Id::new(21), "arch", Id::new(1), Id::new(2), Direction::North, true)
                .unwrap(),
        )
        .unwrap();
        let mut player = Player::new(Id::new(31), "Rowan", 3).unwrap();
        player.set_location(Id::new(1)).unwrap();
        game.add_player(player).unwrap();
        game
    }

    #[test]
    fn duplicate_ids_are_rejected_per_kind() {
        let mut game = two_room_world();
        assert!(game.add_space(Space::new(Id::new(1), "Again").unwrap()).is_err());
        // The same raw id is fine for a different entity kind.
        game.add_object(Object::new(Id::new(1), "coin").unwrap()).unwrap();
        assert!(game.add_object(Object::new(Id::new(1), "coin").unwrap()).is_err());
    }

    #[test]
    fn connection_lookup() {
        let game = two_room_world();
        assert_eq!(game.connection(Id::new(1), Direction::North), Id::new(2));
        assert_eq!(game.connection(Id::new(1), Direction::South), Id::NONE);
        assert!(game.connection_is_open(Id::new(1), Direction::North));
        // Missing link and closed link are indistinguishable here.
        assert!(!game.connection_is_open(Id::new(1), Direction::South));
    }

    #[test]
    fn locate_and_move_character() {
        let mut game = two_room_world();
        game.add_character(Character::new(Id::new(41), "Warden").unwrap())
            .unwrap();
        assert_eq!(game.locate_character(Id::new(41)), Id::NONE);

        game.move_character(Id::new(41), Id::new(1)).unwrap();
        assert_eq!(game.locate_character(Id::new(41)), Id::new(1));
        assert!(game.space(Id::new(1)).unwrap().characters().contains(Id::new(41)));

        game.move_character(Id::new(41), Id::new(2)).unwrap();
        assert_eq!(game.locate_character(Id::new(41)), Id::new(2));
        assert!(!game.space(Id::new(1)).unwrap().characters().contains(Id::new(41)));

        assert!(game.move_character(Id::new(41), Id::new(99)).is_err());
    }

    #[test]
    fn objects_in_is_derived_from_object_locations() {
        let mut game = two_room_world();
        let mut lantern = Object::new(Id::new(51), "lantern").unwrap();
        lantern.set_location(Id::new(1));
        game.add_object(lantern).unwrap();
        let mut key = Object::new(Id::new(52), "key").unwrap();
        key.set_location(Id::new(2));
        game.add_object(key).unwrap();

        let here: Vec<Id> = game.objects_in(Id::new(1)).map(Object::id).collect();
        assert_eq!(here, vec![Id::new(51)]);

        game.object_mut(Id::new(51)).unwrap().set_location(Id::NONE);
        assert_eq!(game.objects_in(Id::new(1)).count(), 0);
    }

    #[test]
    fn interface_tracks_active_player() {
        let mut game = two_room_world();
        let mut second = Player::new(Id::new(32), "Ash", 3).unwrap();
        second.set_location(Id::new(1)).unwrap();
        game.add_player(second).unwrap();

        game.set_last_message("hello Rowan");
        game.set_turn(1).unwrap();
        game.set_last_message("hello Ash");

        assert_eq!(game.last_message(), "hello Ash");
        game.set_turn(0).unwrap();
        assert_eq!(game.last_message(), "hello Rowan");

        assert!(game.set_turn(2).is_err());
    }

    #[test]
    fn world_survives_a_json_round_trip() {
        let mut game = two_room_world();
        game.set_feedback("welcome");
        let json = serde_json::to_string(&game).unwrap();
        let back: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(back.players().len(), 1);
        assert_eq!(back.connection(Id::new(1), Direction::North), Id::new(2));
        assert_eq!(back.feedback(), "welcome");
    }

    #[test]
    fn player_location_rejects_sentinel() {
        let mut game = two_room_world();
        assert!(game.set_player_location(Id::NONE).is_err());
        game.set_player_location(Id::new(2)).unwrap();
        assert_eq!(game.player_location(), Id::new(2));
    }
}
