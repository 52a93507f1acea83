use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use tg_core::space::TILE_ROWS;
use tg_core::{Character, Direction, Game, Id, Link, Object, Player, Space, WorldError};

/// Convenience alias for loader results.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised while reading or parsing a world data file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// The file that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A record ended before a required field.
    #[error("{record} record is missing the {field} field")]
    MissingField {
        /// The record kind, e.g. `space`.
        record: &'static str,
        /// The missing field.
        field: &'static str,
    },
    /// A numeric field did not parse.
    #[error("{record} record has a bad {field} value {value:?}")]
    BadNumber {
        /// The record kind.
        record: &'static str,
        /// The offending field.
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },
    /// A flag field was neither `0` nor `1`.
    #[error("{record} record has flag {field} set to {value:?}, expected 0 or 1")]
    BadFlag {
        /// The record kind.
        record: &'static str,
        /// The offending field.
        field: &'static str,
        /// The raw text of the flag.
        value: String,
    },
    /// A link record named a direction code outside `0..=3`.
    #[error("unknown direction code {0}")]
    BadDirection(i64),
    /// The parsed record was structurally valid but the world rejected it.
    #[error(transparent)]
    World(#[from] WorldError),
}

// ---------------------------------------------------------------------------
// Record field cursor
// ---------------------------------------------------------------------------

/// Walks the `|`-separated fields of one record, turning exhaustion and
/// parse failures into [`LoadError`]s that name the record and field.
struct Fields<'a> {
    record: &'static str,
    parts: std::str::Split<'a, char>,
}

impl<'a> Fields<'a> {
    fn new(record: &'static str, body: &'a str) -> Self {
        Self {
            record,
            parts: body.split('|'),
        }
    }

    fn next(&mut self, field: &'static str) -> LoadResult<&'a str> {
        self.parts.next().ok_or(LoadError::MissingField {
            record: self.record,
            field,
        })
    }

    fn next_opt(&mut self) -> Option<&'a str> {
        self.parts.next()
    }

    fn number<T: std::str::FromStr>(&mut self, field: &'static str) -> LoadResult<T> {
        let raw = self.next(field)?;
        raw.trim().parse().map_err(|_| LoadError::BadNumber {
            record: self.record,
            field,
            value: raw.to_string(),
        })
    }

    fn id(&mut self, field: &'static str) -> LoadResult<Id> {
        Ok(Id::new(self.number(field)?))
    }

    fn flag(&mut self, field: &'static str) -> LoadResult<bool> {
        let raw = self.next(field)?;
        match raw.trim() {
            "0" => Ok(false),
            "1" => Ok(true),
            _ => Err(LoadError::BadFlag {
                record: self.record,
                field,
                value: raw.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Record parsers
// ---------------------------------------------------------------------------

// #s:id|name|row0|row1|row2|row3|row4   (rows optional, blank when absent)
fn parse_space(game: &mut Game, body: &str) -> LoadResult<()> {
    let mut fields = Fields::new("space", body);
    let id = fields.id("id")?;
    let name = fields.next("name")?;
    let mut space = Space::new(id, name)?;
    for row in 0..TILE_ROWS {
        match fields.next_opt() {
            Some(text) => space.set_tile_row(row, text)?,
            None => break,
        }
    }
    game.add_space(space)?;
    Ok(())
}

// #p:id|name|tile|location|health|backpack
fn parse_player(game: &mut Game, body: &str) -> LoadResult<()> {
    let mut fields = Fields::new("player", body);
    let id = fields.id("id")?;
    let name = fields.next("name")?;
    let tile = fields.next("tile")?;
    let location = fields.id("location")?;
    let health = fields.number("health")?;
    let capacity = fields.number("backpack")?;

    let mut player = Player::new(id, name, capacity)?;
    player.set_tile(tile)?;
    player.set_location(location)?;
    player.set_health(health)?;

    // The starting space is known to its player from the first frame on.
    game.space_mut(location)
        .ok_or(WorldError::UnknownSpace(location))?
        .mark_discovered();
    game.add_player(player)?;
    Ok(())
}

// #o:id|name|location|health|movable|dependency|opens[|description]
fn parse_object(game: &mut Game, body: &str) -> LoadResult<()> {
    let mut fields = Fields::new("object", body);
    let id = fields.id("id")?;
    let name = fields.next("name")?;
    let location = fields.id("location")?;
    let health = fields.number("health")?;
    let movable = fields.flag("movable")?;
    let dependency = fields.id("dependency")?;
    let opens = fields.id("opens")?;

    let mut object = Object::new(id, name)?;
    object.set_location(location);
    object.set_health(health);
    object.set_movable(movable);
    object.set_dependency(dependency);
    object.set_opens(opens);
    if let Some(description) = fields.next_opt() {
        object.set_description(description);
    }
    game.add_object(object)?;
    Ok(())
}

// #l:id|name|origin|destination|direction|open
fn parse_link(game: &mut Game, body: &str) -> LoadResult<()> {
    let mut fields = Fields::new("link", body);
    let id = fields.id("id")?;
    let name = fields.next("name")?;
    let origin = fields.id("origin")?;
    let destination = fields.id("destination")?;
    let code = fields.number("direction")?;
    let open = fields.flag("open")?;

    let direction = Direction::from_code(code).ok_or(LoadError::BadDirection(code))?;
    game.add_link(Link::new(id, name, origin, destination, direction, open)?)?;
    Ok(())
}

// #c:id|name|tile|location|health|friendly[|message]
fn parse_character(game: &mut Game, body: &str) -> LoadResult<()> {
    let mut fields = Fields::new("character", body);
    let id = fields.id("id")?;
    let name = fields.next("name")?;
    let tile = fields.next("tile")?;
    let location = fields.id("location")?;
    let health = fields.number("health")?;
    let friendly = fields.flag("friendly")?;

    let mut character = Character::new(id, name)?;
    character.set_tile(tile)?;
    character.set_health(health)?;
    character.set_friendly(friendly);
    if let Some(message) = fields.next_opt() {
        character.set_message(message);
    }

    let placed = character.id();
    game.add_character(character)?;
    game.move_character(placed, location)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// One pass per entity kind so records may appear in any order in the file.
const PASSES: [(&str, fn(&mut Game, &str) -> LoadResult<()>); 5] = [
    ("#s:", parse_space),
    ("#p:", parse_player),
    ("#o:", parse_object),
    ("#l:", parse_link),
    ("#c:", parse_character),
];

/// Build a [`Game`] from the text of a world data file.
///
/// The format is line oriented: each non-blank line is one record whose
/// kind is given by its prefix (`#s:` space, `#p:` player, `#o:` object,
/// `#l:` link, `#c:` character) followed by `|`-separated fields. Spaces
/// load first, then players, objects, links, and characters, so records
/// may reference entities defined later in the file. Lines without a
/// known prefix are ignored.
pub fn parse_game(text: &str) -> LoadResult<Game> {
    let mut game = Game::new();
    for (prefix, parse) in PASSES {
        for line in text.lines() {
            if let Some(body) = line.strip_prefix(prefix) {
                parse(&mut game, body)?;
            }
        }
    }
    Ok(game)
}

/// Read and parse a world data file from disk.
pub fn load_game(path: impl AsRef<Path>) -> LoadResult<Game> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_game(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tg_core::Direction;

    const WORLD: &str = "\
#s:1|Gatehouse| ____ | :  : | :  : | :__: |
#s:2|Crypt
#l:10|Iron Door|1|2|0|0
#p:31|Wren|(@)|1|50|5
#o:20|Lantern|1|30|1|-1|-1|A dented brass lantern.
#o:21|Altar|2|100|0|-1|-1
#c:40|Keeper|~[o]~ |1|100|1|Mind the door.
#c:41|Ghoul|~{x}~ |2|60|0
";

    #[test]
    fn loads_every_record_kind() {
        let game = parse_game(WORLD).unwrap();
        assert_eq!(game.spaces().len(), 2);
        assert_eq!(game.players().len(), 1);
        assert_eq!(game.objects().len(), 2);
        assert_eq!(game.links().len(), 1);
        assert_eq!(game.characters().len(), 2);
    }

    #[test]
    fn player_fields_and_start_space() {
        let game = parse_game(WORLD).unwrap();
        let player = game.player(0).unwrap();
        assert_eq!(player.name(), "Wren");
        assert_eq!(player.tile(), "(@)");
        assert_eq!(player.location(), Id::new(1));
        assert_eq!(player.health(), 50);
        assert!(game.space(Id::new(1)).unwrap().discovered());
        assert!(!game.space(Id::new(2)).unwrap().discovered());
    }

    #[test]
    fn space_tile_rows_are_padded() {
        let game = parse_game(WORLD).unwrap();
        let gatehouse = game.space(Id::new(1)).unwrap();
        assert_eq!(gatehouse.tile_row(0).len(), 20);
        assert!(gatehouse.tile_row(0).starts_with(" ____ "));
        // The crypt record carries no rows at all.
        let crypt = game.space(Id::new(2)).unwrap();
        assert!(crypt.tile_row(0).trim().is_empty());
    }

    #[test]
    fn object_fields_and_optional_description() {
        let game = parse_game(WORLD).unwrap();
        let lantern = game.object(Id::new(20)).unwrap();
        assert!(lantern.movable());
        assert_eq!(lantern.description(), "A dented brass lantern.");
        assert!(lantern.dependency().is_none());
        let altar = game.object(Id::new(21)).unwrap();
        assert!(!altar.movable());
        assert_eq!(altar.description(), "");
    }

    #[test]
    fn link_fields() {
        let game = parse_game(WORLD).unwrap();
        let door = game.link(Id::new(10)).unwrap();
        assert_eq!(door.origin(), Id::new(1));
        assert_eq!(door.destination(), Id::new(2));
        assert_eq!(door.direction(), Direction::North);
        assert!(!door.is_open());
        assert_eq!(game.connection(Id::new(1), Direction::North), Id::new(2));
        assert!(!game.connection_is_open(Id::new(1), Direction::North));
    }

    #[test]
    fn characters_are_placed_in_their_spaces() {
        let game = parse_game(WORLD).unwrap();
        assert_eq!(game.locate_character(Id::new(40)), Id::new(1));
        assert_eq!(game.locate_character(Id::new(41)), Id::new(2));
        let keeper = game.character(Id::new(40)).unwrap();
        assert!(keeper.friendly());
        assert_eq!(keeper.message(), "Mind the door.");
        let ghoul = game.character(Id::new(41)).unwrap();
        assert!(!ghoul.friendly());
        assert_eq!(ghoul.health(), 60);
    }

    #[test]
    fn records_load_regardless_of_file_order() {
        // The character and link come before the spaces they reference.
        let scrambled = "\
#c:40|Keeper|~[o]~ |1|100|1
#l:10|Door|1|2|2|1
#p:31|Wren|(@)|1|100|5
#s:2|Crypt
#s:1|Gatehouse
";
        let game = parse_game(scrambled).unwrap();
        assert_eq!(game.locate_character(Id::new(40)), Id::new(1));
        assert_eq!(game.connection(Id::new(1), Direction::East), Id::new(2));
    }

    #[test]
    fn unknown_prefixes_and_blank_lines_are_ignored() {
        let text = "\n# a comment\n#s:1|Hall\n\n#x:junk\n";
        let game = parse_game(text).unwrap();
        assert_eq!(game.spaces().len(), 1);
    }

    #[test]
    fn missing_field_is_reported_with_record_and_field() {
        let err = parse_game("#l:10|Door|1|2").unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingField {
                record: "link",
                field: "direction",
            }
        ));
    }

    #[test]
    fn bad_number_is_reported() {
        let err = parse_game("#s:one|Hall").unwrap_err();
        assert!(matches!(
            err,
            LoadError::BadNumber {
                record: "space",
                field: "id",
                ..
            }
        ));
    }

    #[test]
    fn bad_flag_is_reported() {
        let err = parse_game("#s:1|Hall\n#o:20|Rock|1|10|yes|-1|-1").unwrap_err();
        assert!(matches!(
            err,
            LoadError::BadFlag {
                record: "object",
                field: "movable",
                ..
            }
        ));
    }

    #[test]
    fn bad_direction_code_is_reported() {
        let err = parse_game("#s:1|A\n#s:2|B\n#l:10|Door|1|2|4|1").unwrap_err();
        assert!(matches!(err, LoadError::BadDirection(4)));
    }

    #[test]
    fn player_in_unknown_space_is_rejected() {
        let err = parse_game("#p:31|Wren|(@)|9|100|5").unwrap_err();
        assert!(matches!(
            err,
            LoadError::World(WorldError::UnknownSpace(id)) if id == Id::new(9)
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = parse_game("#s:1|Hall\n#s:1|Hall Again").unwrap_err();
        assert!(matches!(err, LoadError::World(_)));
    }

    #[test]
    fn character_in_unknown_space_is_rejected() {
        let err = parse_game("#c:40|Ghost|~~~~~~|7|100|0").unwrap_err();
        assert!(matches!(
            err,
            LoadError::World(WorldError::UnknownSpace(id)) if id == Id::new(7)
        ));
    }

    #[test]
    fn load_game_reports_missing_file() {
        let err = load_game("/definitely/not/here.dat").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
