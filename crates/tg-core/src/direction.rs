use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four cardinal directions a link can point in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
}

impl Direction {
    /// Parse a direction token (short or long form, case-insensitive).
    ///
    /// Accepts `n`/`north`, `s`/`south`, `e`/`east`, `w`/`west`. Any other
    /// token is `None`.
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("n") || token.eq_ignore_ascii_case("north") {
            Some(Self::North)
        } else if token.eq_ignore_ascii_case("s") || token.eq_ignore_ascii_case("south") {
            Some(Self::South)
        } else if token.eq_ignore_ascii_case("e") || token.eq_ignore_ascii_case("east") {
            Some(Self::East)
        } else if token.eq_ignore_ascii_case("w") || token.eq_ignore_ascii_case("west") {
            Some(Self::West)
        } else {
            None
        }
    }

    /// Decode the numeric direction code used by the save format.
    ///
    /// 0 = north, 1 = south, 2 = east, 3 = west.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::North),
            1 => Some(Self::South),
            2 => Some(Self::East),
            3 => Some(Self::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::North => write!(f, "north"),
            Self::South => write!(f, "south"),
            Self::East => write!(f, "east"),
            Self::West => write!(f, "west"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!(Direction::parse("n"), Some(Direction::North));
        assert_eq!(Direction::parse("NORTH"), Some(Direction::North));
        assert_eq!(Direction::parse("South"), Some(Direction::South));
        assert_eq!(Direction::parse("e"), Some(Direction::East));
        assert_eq!(Direction::parse("w"), Some(Direction::West));
    }

    #[test]
    fn rejects_other_tokens() {
        assert_eq!(Direction::parse("up"), None);
        assert_eq!(Direction::parse(""), None);
        assert_eq!(Direction::parse("nor"), None);
    }

    #[test]
    fn save_format_codes() {
        assert_eq!(Direction::from_code(0), Some(Direction::North));
        assert_eq!(Direction::from_code(1), Some(Direction::South));
        assert_eq!(Direction::from_code(2), Some(Direction::East));
        assert_eq!(Direction::from_code(3), Some(Direction::West));
        assert_eq!(Direction::from_code(4), None);
        assert_eq!(Direction::from_code(-1), None);
    }
}
