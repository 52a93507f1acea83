use crate::id::Id;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Structural errors raised by constructors and setters.
///
/// These are never fatal: callers check and react. Action-level failures
/// (a precondition of a command not holding) are reported through the
/// command's [`Outcome`](crate::command::Outcome) instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// The "no entity" sentinel was used where a real id is required.
    #[error("the none id is not a valid entity id")]
    NoneId,

    /// The id is already present in the set.
    #[error("id {0} is already in the set")]
    DuplicateId(Id),

    /// The id is not present in the set.
    #[error("id {0} is not in the set")]
    MissingId(Id),

    /// An entity with this id already exists in the registry.
    #[error("{kind} {id} already exists")]
    DuplicateEntity {
        /// The entity kind ("space", "object", ...).
        kind: &'static str,
        /// The clashing id.
        id: Id,
    },

    /// The referenced space does not exist in the registry.
    #[error("space {0} does not exist")]
    UnknownSpace(Id),

    /// The player index is out of range.
    #[error("no player at turn slot {0}")]
    UnknownPlayer(usize),

    /// The inventory is already at its configured maximum.
    #[error("inventory is full ({capacity} objects)")]
    InventoryFull {
        /// The configured maximum.
        capacity: usize,
    },

    /// Health values must not be negative.
    #[error("health must not be negative, got {0}")]
    NegativeHealth(i32),

    /// A graphical tile row has the wrong width.
    #[error("tile must be exactly {expected} columns, got {got}")]
    BadTileWidth {
        /// The required width.
        expected: usize,
        /// The width that was supplied.
        got: usize,
    },

    /// A tile row index is out of range.
    #[error("tile has {rows} rows, row {row} does not exist")]
    BadTileRow {
        /// The number of rows in the tile.
        rows: usize,
        /// The out-of-range row index.
        row: usize,
    },

    /// A hostile character cannot follow a player.
    #[error("a hostile character cannot follow a player")]
    HostileFollower,

    /// A command argument exceeded the allowed length.
    #[error("command argument is longer than {max} bytes")]
    ArgumentTooLong {
        /// The maximum argument length.
        max: usize,
    },
}
