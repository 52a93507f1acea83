//! The Thorngate action engine and world loader.
//!
//! This crate turns a [`tg_core::Game`] into a playable simulation: the
//! [`ActionEngine`] validates and applies one command at a time for the
//! active player, and the [`loader`] builds a world from a line-oriented
//! data file. Combat randomness enters through the [`CoinFlip`] trait so
//! tests and the `--seed` flag can make whole sessions deterministic.

/// Command dispatch and the per-command handlers.
pub mod actions;
/// The 50/50 branch source used by ATTACK.
pub mod coin;
/// The line-oriented world-file loader.
pub mod loader;

/// Re-export of [`actions::ActionEngine`].
pub use actions::ActionEngine;
/// Re-export of [`coin::CoinFlip`].
pub use coin::CoinFlip;
/// Re-exports of the loader entry points and error type.
pub use loader::{LoadError, LoadResult, load_game, parse_game};
