//! CLI frontend for the Thorngate adventure engine.

mod render;
mod run;

use std::fs::File;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;
use tg_engine::{ActionEngine, load_game};

#[derive(Parser)]
#[command(
    name = "thorngate",
    about = "Thorngate, a turn-based text adventure engine",
    version
)]
struct Cli {
    /// World data file to load
    data_file: PathBuf,

    /// Append one line per accepted command to this file
    #[arg(long)]
    log: Option<PathBuf>,

    /// RNG seed for deterministic combat
    #[arg(long)]
    seed: Option<u64>,

    /// Print the loaded world as JSON and exit
    #[arg(long)]
    dump: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = play(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn play(cli: Cli) -> Result<(), String> {
    let game = load_game(&cli.data_file).map_err(|e| e.to_string())?;

    if cli.dump {
        let json = serde_json::to_string_pretty(&game).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    if let Some(path) = &cli.log {
        let file = File::create(path)
            .map_err(|e| format!("cannot open log file {}: {e}", path.display()))?;
        tracing_subscriber::fmt()
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }

    let engine = match cli.seed {
        Some(seed) => ActionEngine::seeded(seed),
        None => ActionEngine::from_entropy(),
    };
    run::session(game, engine)
}
