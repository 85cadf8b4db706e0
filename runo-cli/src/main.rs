mod console;

use std::io;

use clap::Parser;
use color_eyre::Result;
use rand::{rngs::StdRng, SeedableRng};
use runo::{interactive::InteractiveStrategy, player::seat_players, uno::Uno};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

use crate::console::ConsoleSink;

#[derive(Parser)]
#[command(about = "Play UNO against the computer")]
struct Args {
    /// Total number of players, including you (2 to 10)
    #[arg(short, long, default_value_t = 4)]
    players: usize,

    /// Your name at the table
    #[arg(short, long, default_value = "Player")]
    name: String,

    /// RNG seed, for replaying the same game
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "starting game");
    let mut rng = StdRng::seed_from_u64(seed);

    let human = InteractiveStrategy::new(io::stdin().lock(), io::stdout());
    let players = seat_players(args.players, args.name, Box::new(human), &mut rng)?;

    let mut uno = Uno::new(players, rng)?;
    let mut sink = ConsoleSink::new(io::stdout());
    uno.run(&mut sink)?;

    Ok(())
}
