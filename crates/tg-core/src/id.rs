use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for every entity in the world.
///
/// Ids are assigned by the save file and are unique per entity kind.
/// Equality is the only meaningful operation; [`Id::NONE`] is the
/// distinguished "no entity" value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id(i64);

impl Id {
    /// The sentinel id meaning "no entity".
    pub const NONE: Id = Id(-1);

    /// Wrap a raw id value.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns true if this is the "no entity" sentinel.
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    /// The raw numeric value.
    pub const fn raw(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "none")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_none() {
        assert!(Id::NONE.is_none());
        assert!(!Id::new(0).is_none());
        assert!(!Id::new(7).is_none());
    }

    #[test]
    fn display_shows_raw_or_none() {
        assert_eq!(Id::new(42).to_string(), "42");
        assert_eq!(Id::NONE.to_string(), "none");
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(Id::new(3), Id::new(3));
        assert_ne!(Id::new(3), Id::new(4));
    }
}
