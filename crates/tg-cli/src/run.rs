//! The round-robin session loop.

use std::io::{self, BufRead, Write};

use tg_core::command::{Command, CommandCode};
use tg_core::game::Game;
use tg_engine::{ActionEngine, CoinFlip};
use tracing::info;

use crate::render;

/// Run a game to completion: one command per player per round, a frame
/// rendered before every prompt. EOF and `exit` end the session; so does
/// the active player's health reaching zero.
pub fn session<C: CoinFlip>(mut game: Game, mut engine: ActionEngine<C>) -> Result<(), String> {
    let players = game.players().len();
    if players == 0 {
        return Err("the world has no players".into());
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    'session: while !game.finished() {
        for slot in 0..players {
            game.set_turn(slot).map_err(|e| e.to_string())?;
            render::frame(&game);

            print!("> ");
            io::stdout().flush().map_err(|e| e.to_string())?;

            line.clear();
            let mut command = match reader.read_line(&mut line) {
                Ok(0) => Command::exit(),
                Err(e) => return Err(e.to_string()),
                Ok(_) => Command::parse_line(&line),
            };

            info!(player = slot, command = %command.code(), arg = command.arg());
            if command.code() == CommandCode::Exit {
                break 'session;
            }
            engine.apply(&mut game, &mut command);

            if game.active_player().is_some_and(|player| player.health() <= 0) {
                game.set_finished(true);
                break;
            }
        }
    }

    render::farewell(&game);
    Ok(())
}
