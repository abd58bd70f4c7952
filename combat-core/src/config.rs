//! Game configuration: who the player is and what they fight.
//!
//! A [`GameConfig`] can be built in code with the `with_*` methods or
//! loaded from JSON. Adversaries are either bestiary presets by name or
//! fully custom entries tagged by behavior:
//!
//! ```json
//! {
//!   "player": { "name": "Ash", "health": 10, "attack_power": 3, "items": ["healing potion"] },
//!   "adversaries": [
//!     "goblin",
//!     { "behavior": "frenzy", "name": { "text": "wolf", "indefinite": "a", "definite": "the" },
//!       "health": 5, "attack_power": 1 }
//!   ],
//!   "seed": 7
//! }
//! ```

use crate::adversary::{self, Adversary, Frenzy, Striker, Taunting};
use crate::dice::Dice;
use crate::engine::CombatEngine;
use crate::items::{self, Item};
use crate::naming::Name;
use crate::player::Player;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Name used when the configuration doesn't give one.
pub const DEFAULT_PLAYER_NAME: &str = "Adventurer";

/// Errors from loading or applying a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown adversary preset: {0}")]
    UnknownAdversary(String),

    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("Adversary {0} has no taunts")]
    EmptyTaunts(String),

    #[error("{name} must start with positive health (got {health})")]
    InvalidHealth { name: String, health: i32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Starting state of the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// `None` lets the front end ask for a name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_health")]
    pub health: i32,
    #[serde(default = "default_attack_power")]
    pub attack_power: u32,
    /// Standard item names, in inventory order.
    #[serde(default)]
    pub items: Vec<String>,
}

fn default_health() -> i32 {
    10
}

fn default_attack_power() -> u32 {
    3
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: None,
            health: default_health(),
            attack_power: default_attack_power(),
            items: vec!["healing potion".to_string()],
        }
    }
}

/// A custom adversary definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "behavior", rename_all = "snake_case")]
pub enum AdversarySpec {
    Striker {
        name: Name,
        health: i32,
        attack_power: u32,
        /// Flavor line; `{name}` becomes "The <name>".
        flavor: String,
    },
    Frenzy {
        name: Name,
        health: i32,
        attack_power: u32,
    },
    Taunting {
        name: Name,
        health: i32,
        attack_power: u32,
        taunts: Vec<String>,
    },
}

impl AdversarySpec {
    pub fn name(&self) -> &Name {
        match self {
            AdversarySpec::Striker { name, .. }
            | AdversarySpec::Frenzy { name, .. }
            | AdversarySpec::Taunting { name, .. } => name,
        }
    }

    pub fn health(&self) -> i32 {
        match self {
            AdversarySpec::Striker { health, .. }
            | AdversarySpec::Frenzy { health, .. }
            | AdversarySpec::Taunting { health, .. } => *health,
        }
    }

    pub fn build(&self) -> Result<Adversary, ConfigError> {
        check_health(self.name().as_str(), self.health())?;
        let adversary = match self {
            AdversarySpec::Striker {
                name,
                health,
                attack_power,
                flavor,
            } => Adversary::new(name.clone(), *health, Striker::new(*attack_power, flavor.clone())),
            AdversarySpec::Frenzy {
                name,
                health,
                attack_power,
            } => Adversary::new(name.clone(), *health, Frenzy::new(*attack_power)),
            AdversarySpec::Taunting {
                name,
                health,
                attack_power,
                taunts,
            } => {
                let behavior = Taunting::new(*attack_power, taunts.clone())
                    .ok_or_else(|| ConfigError::EmptyTaunts(name.to_string()))?;
                Adversary::new(name.clone(), *health, behavior)
            }
        };
        Ok(adversary)
    }
}

fn check_health(name: &str, health: i32) -> Result<(), ConfigError> {
    if health <= 0 {
        return Err(ConfigError::InvalidHealth {
            name: name.to_string(),
            health,
        });
    }
    Ok(())
}

/// One entry in the adversary list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdversaryEntry {
    /// A bestiary preset such as `"goblin"`.
    Preset(String),
    Custom(AdversarySpec),
}

impl AdversaryEntry {
    pub fn build(&self) -> Result<Adversary, ConfigError> {
        match self {
            AdversaryEntry::Preset(name) => {
                adversary::find_preset(name).ok_or_else(|| ConfigError::UnknownAdversary(name.clone()))
            }
            AdversaryEntry::Custom(spec) => spec.build(),
        }
    }
}

impl From<&str> for AdversaryEntry {
    fn from(name: &str) -> Self {
        AdversaryEntry::Preset(name.to_string())
    }
}

impl From<AdversarySpec> for AdversaryEntry {
    fn from(spec: AdversarySpec) -> Self {
        AdversaryEntry::Custom(spec)
    }
}

/// Everything needed to start a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default = "default_adversaries")]
    pub adversaries: Vec<AdversaryEntry>,
    /// Fixed seed for reproducible flavor text.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_adversaries() -> Vec<AdversaryEntry> {
    vec!["goblin".into(), "raging goblin".into()]
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player: PlayerConfig::default(),
            adversaries: default_adversaries(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Set the player name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player.name = Some(name.into());
        self
    }

    /// Set the player's starting health.
    pub fn with_health(mut self, health: i32) -> Self {
        self.player.health = health;
        self
    }

    /// Set the player's attack power.
    pub fn with_attack_power(mut self, attack_power: u32) -> Self {
        self.player.attack_power = attack_power;
        self
    }

    /// Add a standard item to the starting inventory.
    pub fn with_item(mut self, name: impl Into<String>) -> Self {
        self.player.items.push(name.into());
        self
    }

    /// Replace the starting inventory.
    pub fn with_items(mut self, names: Vec<String>) -> Self {
        self.player.items = names;
        self
    }

    /// Append an adversary to the sequence.
    pub fn with_adversary(mut self, entry: impl Into<AdversaryEntry>) -> Self {
        self.adversaries.push(entry.into());
        self
    }

    /// Replace the adversary sequence.
    pub fn with_adversaries(mut self, entries: Vec<AdversaryEntry>) -> Self {
        self.adversaries = entries;
        self
    }

    /// Use deterministic dice.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn player_name(&self) -> &str {
        self.player.name.as_deref().unwrap_or(DEFAULT_PLAYER_NAME)
    }

    /// Build the player described by this configuration.
    pub fn build_player(&self) -> Result<Player, ConfigError> {
        check_health(self.player_name(), self.player.health)?;
        let items = self
            .player
            .items
            .iter()
            .map(|name| items::find_item(name).ok_or_else(|| ConfigError::UnknownItem(name.clone())))
            .collect::<Result<Vec<Item>, _>>()?;

        Ok(Player::with_items(
            Name::specific(self.player_name()),
            self.player.health,
            self.player.attack_power,
            items,
        ))
    }

    /// Build the adversaries in order.
    pub fn build_adversaries(&self) -> Result<Vec<Adversary>, ConfigError> {
        self.adversaries.iter().map(AdversaryEntry::build).collect()
    }

    /// Build a ready-to-run engine.
    pub fn build_engine(&self) -> Result<CombatEngine, ConfigError> {
        let dice = match self.seed {
            Some(seed) => Dice::seeded(seed),
            None => Dice::from_entropy(),
        };
        Ok(CombatEngine::new(
            self.build_player()?,
            self.build_adversaries()?,
            dice,
        ))
    }
}
