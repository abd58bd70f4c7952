//! Terminal front end for the combat game.
//!
//! ```bash
//! cargo run -p combat -- --name Ash --seed 7
//! cargo run -p combat -- --config roster.json --item "fire bomb"
//! ```
//!
//! Logs go to stderr and are filtered with `RUST_LOG` (default `warn`).

mod console;

use anyhow::{Context, Result};
use clap::Parser;
use combat_core::GameConfig;
use console::{ConsoleInput, ConsoleOutput};
use std::path::PathBuf;

/// Fight your way through a line of adversaries.
#[derive(Parser, Debug)]
#[command(name = "combat")]
#[command(about = "Turn-based text combat game", long_about = None)]
#[command(version)]
struct Cli {
    /// Your hero's name (asked for if not given)
    #[arg(long)]
    name: Option<String>,

    /// Starting health
    #[arg(long)]
    health: Option<i32>,

    /// Damage dealt by each attack
    #[arg(long)]
    attack: Option<u32>,

    /// Seed for reproducible battles
    #[arg(long)]
    seed: Option<u64>,

    /// JSON game configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extra starting item (repeatable)
    #[arg(long = "item")]
    items: Vec<String>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(name) = &self.name {
            config = config.with_player_name(name);
        }
        if let Some(health) = self.health {
            config = config.with_health(health);
        }
        if let Some(attack) = self.attack {
            config = config.with_attack_power(attack);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        for item in &self.items {
            config = config.with_item(item);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = cli.game_config()?;

    let mut input = ConsoleInput::stdin();
    let mut output = ConsoleOutput::stdout();

    // Some spacing so the game starts on a clean screen
    for _ in 0..5 {
        println!();
    }

    if config.player.name.is_none() {
        println!("Hello, adventurer. What is your name?");
        let name = input.read_line().context("reading player name")?;
        let name = name.trim();
        if !name.is_empty() {
            config = config.with_player_name(name);
        }
    }

    let mut engine = config.build_engine().context("building the battle")?;
    tracing::info!(player = config.player_name(), adversaries = engine.adversaries().len(), "starting game");

    let report = engine.run(&mut input, &mut output)?;

    tracing::info!(
        outcome = ?report.outcome,
        defeated = report.adversaries_defeated,
        rounds = report.rounds,
        health = report.player_health,
        "game over"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "combat", "--name", "Ash", "--health", "20", "--attack", "4", "--seed", "3", "--item",
            "fire bomb",
        ]);
        let config = cli.game_config().unwrap();

        assert_eq!(config.player_name(), "Ash");
        assert_eq!(config.player.health, 20);
        assert_eq!(config.player.attack_power, 4);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.player.items, ["healing potion", "fire bomb"]);
    }

    #[test]
    fn test_no_flags_is_default() {
        let cli = Cli::parse_from(["combat"]);
        assert_eq!(cli.game_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_missing_config_file() {
        let cli = Cli::parse_from(["combat", "--config", "/nonexistent/roster.json"]);
        assert!(cli.game_config().is_err());
    }
}
