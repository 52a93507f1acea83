//! Core types for Thorngate: the world graph, entities, and the game
//! registry.
//!
//! This crate defines the in-memory world model: spaces linked by
//! directional, lockable connections, the entities that populate them, and
//! the [`Game`] registry that owns everything. It is independent of the
//! action engine: you can construct a [`Game`] programmatically or load one
//! from a save file with the engine crate's loader.

/// Character state and the hostile-follower invariant.
pub mod character;
/// The command vocabulary, argument handling, and line parser.
pub mod command;
/// Cardinal directions for links and the MOVE command.
pub mod direction;
/// Structural error types used throughout the crate.
pub mod error;
/// The central registry that owns all entities and the turn state.
pub mod game;
/// Opaque entity identifiers.
pub mod id;
/// Capacity-bounded object storage for players.
pub mod inventory;
/// Directional, lockable connections between spaces.
pub mod link;
/// Object state: location, description, and breakable-object fields.
pub mod object;
/// Player state: location, health, backpack, tile.
pub mod player;
/// The unique-id collection backing occupancy and inventories.
pub mod set;
/// Location nodes of the world graph.
pub mod space;

/// Re-export of [`character::Character`].
pub use character::Character;
/// Re-exports of the command model.
pub use command::{Command, CommandCode, Outcome};
/// Re-export of [`direction::Direction`].
pub use direction::Direction;
/// Re-exports of the error types.
pub use error::{WorldError, WorldResult};
/// Re-export of [`game::Game`].
pub use game::Game;
/// Re-export of [`id::Id`].
pub use id::Id;
/// Re-export of [`inventory::Inventory`].
pub use inventory::Inventory;
/// Re-export of [`link::Link`].
pub use link::Link;
/// Re-export of [`object::Object`].
pub use object::Object;
/// Re-export of [`player::Player`].
pub use player::Player;
/// Re-export of [`set::IdSet`].
pub use set::IdSet;
/// Re-export of [`space::Space`].
pub use space::Space;
