//! Read-only frame rendering.
//!
//! Everything shown is queried fresh from the registry each frame; the
//! renderer holds no state of its own.

use colored::Colorize;

use tg_core::command::{CommandCode, Outcome};
use tg_core::game::Game;
use tg_core::object::Object;
use tg_core::space::TILE_ROWS;

/// Print one frame for the active player: the current space, whatever is
/// in it, the player's own state, and the echoes of the last command.
pub fn frame(game: &Game) {
    let Some(player) = game.active_player() else {
        return;
    };
    let location = player.location();

    println!();
    if let Some(space) = game.space(location) {
        println!("  {}", space.name().bold());
        for row in 0..TILE_ROWS {
            println!("  {}", space.tile_row(row));
        }

        let objects: Vec<&Object> = game.objects_in(location).collect();
        if !objects.is_empty() {
            println!("  {}", "You see:".dimmed());
            for object in objects {
                println!("    {} ({})", object.name(), object.health());
            }
        }

        let occupants: Vec<_> = space
            .characters()
            .iter()
            .filter_map(|id| game.character(id))
            .collect();
        if !occupants.is_empty() {
            println!("  {}", "With you:".dimmed());
            for character in occupants {
                println!(
                    "    {} {} ({})",
                    character.tile(),
                    character.name(),
                    character.health()
                );
            }
        }
    }

    println!(
        "  {} {}  {}",
        player.tile(),
        player.name().bold(),
        format!("hp {}", player.health()).dimmed()
    );
    let carried: Vec<&str> = player
        .backpack()
        .iter()
        .filter_map(|id| game.object(id))
        .map(Object::name)
        .collect();
    if !carried.is_empty() {
        println!("  Backpack: {}", carried.join(", "));
    }

    if let Some(command) = game.last_command() {
        if command.code() != CommandCode::None {
            let status = match command.status() {
                Outcome::Success => "OK".green(),
                Outcome::Failure => "ERROR".red(),
            };
            if command.arg().is_empty() {
                println!("  Last: {} [{status}]", command.code());
            } else {
                println!("  Last: {} {} [{status}]", command.code(), command.arg());
            }
        }
    }
    let message = game.last_message();
    if !message.is_empty() {
        println!("  {message}");
    }
    if !game.feedback().is_empty() {
        println!("  {}", game.feedback().yellow());
    }
}

/// Print the end-of-session line.
pub fn farewell(game: &Game) {
    if game.finished() {
        println!("\n  {}", "The adventure is over.".bold());
    } else {
        println!("\n  Farewell.");
    }
}
