use std::{
    io::{self, BufWriter},
    path::PathBuf,
};

use anyhow::Result;
use clap::Parser;
use log::info;

use seedling::{
    rules::{Preset, RulesLoader},
    weather::RandomWeather,
    Game, Session,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Tend a plant until it blooms")]
struct Cli {
    /// Built-in rules table
    #[arg(long, value_enum, default_value_t = Preset::Canonical)]
    preset: Preset,

    /// YAML rules file, takes precedence over --preset
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Seed for the weather; drawn from the OS when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter written to stderr (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(filter) = &cli.log_level {
        logger.parse_filters(filter);
    }
    logger.init();

    let rules = match &cli.rules {
        Some(path) => RulesLoader::new(".").load(path)?,
        None => cli.preset.rules(),
    };
    let weather = match cli.seed {
        Some(seed) => {
            info!("weather seeded with {seed}");
            RandomWeather::from_seed(seed)
        }
        None => RandomWeather::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let game = Game::new(rules, weather);
    Session::new(game, stdin.lock(), BufWriter::new(stdout.lock())).run()?;
    Ok(())
}
