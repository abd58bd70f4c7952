//! Turn-based text combat engine.
//!
//! This crate provides:
//! - A player who attacks, defends, uses items or (tries to) run away
//! - Adversaries with pluggable turn strategies
//! - Grammatical names ("a goblin", "The goblin", "Ash")
//! - An engine that runs the player through a sequence of encounters
//!
//! The engine never reads a terminal or prints. Front ends implement
//! [`InputProvider`] and [`OutputSink`].
//!
//! # Quick Start
//!
//! ```ignore
//! use combat_core::GameConfig;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut engine = GameConfig::default()
//!         .with_player_name("Ash")
//!         .build_engine()?;
//!
//!     let report = engine.run(&mut my_input, &mut my_output)?;
//!     println!("{:?}", report.outcome);
//!     Ok(())
//! }
//! ```

pub mod adversary;
pub mod config;
pub mod dice;
pub mod engine;
pub mod entity;
pub mod inventory;
pub mod io;
pub mod items;
pub mod naming;
pub mod player;
pub mod testing;

// Primary public API
pub use adversary::{Adversary, Behavior, Frenzy, Stamina, Striker, Taunting};
pub use config::{AdversaryEntry, AdversarySpec, ConfigError, GameConfig, PlayerConfig};
pub use dice::Dice;
pub use engine::{BattleReport, CombatEngine, CombatError, Outcome};
pub use entity::Entity;
pub use inventory::{Inventory, InventoryEntry, InventoryError};
pub use io::{InputError, InputProvider, OutputSink};
pub use items::{Item, ItemEffect};
pub use naming::{Capitalization, DefiniteArticle, IndefiniteArticle, Name};
pub use player::{ActionChoice, CombatAction, Player, TurnError};
pub use testing::{ScriptedInput, TestHarness, Transcript};
