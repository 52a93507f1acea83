//! Command dispatch and the per-command world transitions.
//!
//! Every handler is a guarded transition: it validates all of its
//! preconditions against the registry, then commits, so a failed command
//! never leaves the world half-mutated. Success means an observable
//! effect; any precondition failure is a plain [`Outcome::Failure`].

use rand::SeedableRng;
use rand::rngs::StdRng;
use tg_core::character::Character;
use tg_core::command::{Command, CommandCode, Outcome};
use tg_core::direction::Direction;
use tg_core::game::Game;
use tg_core::id::Id;
use tg_core::object::Object;
use tg_core::player::Player;

use crate::coin::CoinFlip;

/// Health lost by whichever side a combat flip goes against.
const ATTACK_DAMAGE: i32 = 10;

/// The action engine: validates and applies commands against a [`Game`].
///
/// Owns the randomness used by ATTACK so a whole session can be made
/// deterministic from one seed.
#[derive(Debug)]
pub struct ActionEngine<C: CoinFlip> {
    coin: C,
}

impl ActionEngine<StdRng> {
    /// An engine whose combat flips derive from the given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// An engine seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<C: CoinFlip> ActionEngine<C> {
    /// An engine using the given coin-flip source.
    pub fn new(coin: C) -> Self {
        Self { coin }
    }

    /// Validate and apply one command for the active player.
    ///
    /// The outcome is stored on the command and on the registry's
    /// last-command record for the active player, so the presentation
    /// layer sees exactly the command just run together with its status.
    /// UNKNOWN always fails without touching the world; EXIT mutates
    /// nothing (the run loop ends the session).
    pub fn apply(&mut self, game: &mut Game, command: &mut Command) -> Outcome {
        let outcome = match command.code() {
            CommandCode::None | CommandCode::Unknown => Outcome::Failure,
            CommandCode::Exit => Outcome::Success,
            CommandCode::Take => take(game, command.arg()),
            CommandCode::Drop => drop_object(game, command.arg()),
            CommandCode::Attack => attack(game, &mut self.coin),
            CommandCode::Chat => chat(game, command.arg()),
            CommandCode::Move => move_player(game, command.arg()),
            CommandCode::Inspect => inspect(game, command.arg()),
            CommandCode::Recruit => recruit(game, command.arg()),
            CommandCode::Abandon => abandon(game, command.arg()),
        };
        command.set_status(outcome);
        game.set_last_command(command.clone());
        outcome
    }
}

/// TAKE: move a named object from the player's space into the backpack.
///
/// First matching object in storage order wins. A full backpack fails
/// before anything moves.
fn take(game: &mut Game, name: &str) -> Outcome {
    if name.is_empty() {
        return Outcome::Failure;
    }
    let location = game.player_location();
    if location.is_none() {
        return Outcome::Failure;
    }
    let target = game
        .objects()
        .iter()
        .find(|object| object.location() == location && object.name().eq_ignore_ascii_case(name))
        .map(Object::id);
    let Some(object_id) = target else {
        return Outcome::Failure;
    };
    let Some(player) = game.active_player_mut() else {
        return Outcome::Failure;
    };
    if player.backpack_mut().add(object_id).is_err() {
        return Outcome::Failure;
    }
    if let Some(object) = game.object_mut(object_id) {
        object.set_location(Id::NONE);
    }
    Outcome::Success
}

/// DROP: move a named object from the backpack to the player's space.
fn drop_object(game: &mut Game, name: &str) -> Outcome {
    if name.is_empty() {
        return Outcome::Failure;
    }
    let location = game.player_location();
    if location.is_none() {
        return Outcome::Failure;
    }
    let Some(player) = game.active_player() else {
        return Outcome::Failure;
    };
    let held = game
        .objects()
        .iter()
        .find(|object| {
            object.name().eq_ignore_ascii_case(name) && player.backpack().contains(object.id())
        })
        .map(Object::id);
    let Some(object_id) = held else {
        return Outcome::Failure;
    };
    let Some(player) = game.active_player_mut() else {
        return Outcome::Failure;
    };
    if player.backpack_mut().remove(object_id).is_err() {
        return Outcome::Failure;
    }
    if let Some(object) = game.object_mut(object_id) {
        object.set_location(location);
    }
    Outcome::Success
}

/// ATTACK: resolve every hostile character sharing the player's space,
/// one coin flip each, sequentially.
///
/// A flip against an already-dead enemy reports "is dead" instead of
/// damaging the player; the health setters refuse to go below zero, so
/// repeated hits clamp rather than wrap. No hostile present is a failure
/// with no health change.
fn attack(game: &mut Game, coin: &mut impl CoinFlip) -> Outcome {
    let location = game.player_location();
    if location.is_none() {
        return Outcome::Failure;
    }
    let ids: Vec<Id> = game.characters().iter().map(Character::id).collect();
    let mut enemy_found = false;
    for id in ids {
        if game.locate_character(id) != location {
            continue;
        }
        if game.character(id).is_none_or(Character::friendly) {
            continue;
        }
        enemy_found = true;
        if coin.flip() {
            let Some(character) = game.character_mut(id) else {
                continue;
            };
            let health = character.health();
            let _ = character.set_health(health - ATTACK_DAMAGE);
            let feedback = if character.health() > 0 {
                format!("{} - {ATTACK_DAMAGE}", character.name())
            } else {
                format!("{} is dead", character.name())
            };
            game.set_feedback(feedback);
        } else if game.character(id).is_some_and(|character| character.health() > 0) {
            if let Some(player) = game.active_player_mut() {
                let health = player.health();
                let _ = player.set_health(health - ATTACK_DAMAGE);
            }
            game.set_feedback("Player - 10");
        } else {
            let name = game
                .character(id)
                .map(|character| character.name().to_string())
                .unwrap_or_default();
            game.set_feedback(format!("{name} is dead"));
        }
    }
    if enemy_found {
        Outcome::Success
    } else {
        Outcome::Failure
    }
}

/// CHAT: show a co-located friendly character's message to the player.
fn chat(game: &mut Game, name: &str) -> Outcome {
    if name.is_empty() {
        return Outcome::Failure;
    }
    let location = game.player_location();
    if location.is_none() {
        return Outcome::Failure;
    }
    let message = game
        .characters()
        .iter()
        .find(|character| {
            game.locate_character(character.id()) == location
                && character.name().eq_ignore_ascii_case(name)
                && character.friendly()
        })
        .map(|character| character.message().to_string());
    match message {
        Some(message) => {
            game.set_last_message(message);
            Outcome::Success
        }
        None => Outcome::Failure,
    }
}

/// MOVE: walk through the link in the given direction, dragging followers.
///
/// Only a malformed direction token is a true error. A missing link
/// narrates "I can't do that" and a closed one "The door is locked", both
/// with a successful outcome and no movement.
fn move_player(game: &mut Game, arg: &str) -> Outcome {
    let Some(direction) = Direction::parse(arg) else {
        return Outcome::Failure;
    };
    let origin = game.player_location();
    if origin.is_none() {
        return Outcome::Failure;
    }
    let Some(player_id) = game.active_player().map(Player::id) else {
        return Outcome::Failure;
    };

    let destination = game.connection(origin, direction);
    if destination.is_none() {
        game.set_feedback("I can't do that");
        return Outcome::Success;
    }
    if !game.connection_is_open(origin, direction) {
        game.set_feedback("The door is locked");
        return Outcome::Success;
    }

    if game.set_player_location(destination).is_err() {
        return Outcome::Failure;
    }
    if let Some(space) = game.space_mut(destination) {
        space.mark_discovered();
    }
    game.set_feedback("");

    // Followers trail one hop: whoever stood at the origin and follows
    // this player comes along.
    let followers: Vec<Id> = game
        .characters()
        .iter()
        .filter(|character| character.following() == player_id)
        .map(Character::id)
        .collect();
    for id in followers {
        if game.locate_character(id) == origin {
            let _ = game.move_character(id, destination);
        }
    }
    Outcome::Success
}

/// INSPECT: show a named object's description. Objects in the space are
/// searched first, then the backpack; first name match wins.
fn inspect(game: &mut Game, name: &str) -> Outcome {
    if name.is_empty() {
        return Outcome::Failure;
    }
    let location = game.player_location();
    if location.is_none() {
        return Outcome::Failure;
    }

    let in_space = game
        .objects()
        .iter()
        .find(|object| object.location() == location && object.name().eq_ignore_ascii_case(name))
        .map(|object| object.description().to_string());
    if let Some(description) = in_space {
        game.set_last_message(description);
        return Outcome::Success;
    }

    if let Some(player) = game.active_player() {
        let carried = player
            .backpack()
            .iter()
            .filter_map(|id| game.object(id))
            .find(|object| object.name().eq_ignore_ascii_case(name))
            .map(|object| object.description().to_string());
        if let Some(description) = carried {
            game.set_last_message(description);
            return Outcome::Success;
        }
    }

    game.set_last_message("You can't inspect that object.");
    Outcome::Failure
}

/// RECRUIT: attach a co-located friendly character to the player.
fn recruit(game: &mut Game, name: &str) -> Outcome {
    if name.is_empty() {
        return Outcome::Failure;
    }
    let location = game.player_location();
    if location.is_none() {
        return Outcome::Failure;
    }
    let Some(player_id) = game.active_player().map(Player::id) else {
        return Outcome::Failure;
    };
    let target = game
        .characters()
        .iter()
        .find(|character| {
            game.locate_character(character.id()) == location
                && character.name().eq_ignore_ascii_case(name)
                && character.friendly()
        })
        .map(Character::id);
    if let Some(id) = target {
        let recruited = game
            .character_mut(id)
            .is_some_and(|character| character.set_following(player_id).is_ok());
        if recruited {
            game.set_feedback("Character recruited successfully!");
            return Outcome::Success;
        }
    }
    game.set_feedback("You cannot recruit this character.");
    Outcome::Failure
}

/// ABANDON: release a co-located character that follows the player.
fn abandon(game: &mut Game, name: &str) -> Outcome {
    if name.is_empty() {
        game.set_feedback("Invalid character name.");
        return Outcome::Failure;
    }
    let location = game.player_location();
    if location.is_none() {
        return Outcome::Failure;
    }
    let Some(player_id) = game.active_player().map(Player::id) else {
        return Outcome::Failure;
    };
    let target = game
        .characters()
        .iter()
        .find(|character| {
            game.locate_character(character.id()) == location
                && character.name().eq_ignore_ascii_case(name)
                && character.following() == player_id
        })
        .map(Character::id);
    let Some(id) = target else {
        game.set_feedback("The character is not following you or is not in your location.");
        return Outcome::Failure;
    };
    let released = game
        .character_mut(id)
        .is_some_and(|character| character.set_following(Id::NONE).is_ok());
    if released {
        game.set_feedback("Character abandoned successfully!");
        Outcome::Success
    } else {
        game.set_feedback("Failed to abandon the character.");
        Outcome::Failure
    }
}
