//! The combat engine: runs the player through every encounter in order.
//!
//! Each round the player acts first. An adversary killed by the player
//! never gets its turn, and the next adversary only appears once the
//! current one is dead.

use crate::adversary::Adversary;
use crate::dice::Dice;
use crate::io::{InputProvider, OutputSink};
use crate::naming::Capitalization;
use crate::player::{Player, TurnError};
use thiserror::Error;

/// Errors that abort a battle.
#[derive(Debug, Error)]
pub enum CombatError {
    #[error("Player turn failed: {0}")]
    Turn(#[from] TurnError),
}

/// How the whole battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
}

/// Summary of a finished battle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleReport {
    pub outcome: Outcome,
    /// Adversaries killed, counted from the front of the sequence.
    pub adversaries_defeated: usize,
    /// Rounds played across all encounters.
    pub rounds: u32,
    /// Player health at the end (may be negative).
    pub player_health: i32,
}

/// Drives a player through an ordered list of adversaries.
pub struct CombatEngine {
    player: Player,
    adversaries: Vec<Adversary>,
    dice: Dice,
}

impl CombatEngine {
    pub fn new(player: Player, adversaries: Vec<Adversary>, dice: Dice) -> Self {
        Self {
            player,
            adversaries,
            dice,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn adversaries(&self) -> &[Adversary] {
        &self.adversaries
    }

    /// Run until the player dies or every adversary is defeated.
    pub fn run(
        &mut self,
        input: &mut dyn InputProvider,
        out: &mut dyn OutputSink,
    ) -> Result<BattleReport, CombatError> {
        let Self {
            player,
            adversaries,
            dice,
        } = self;

        out.write_line(&format!("Welcome, {}! Your journey begins!", player.name()));

        let mut defeated = 0;
        let mut rounds = 0;

        for adversary in adversaries.iter_mut() {
            if player.is_dead() {
                break;
            }

            out.blank_line();
            out.write_line("You continue on your journey...");
            out.write_line(&format!(
                "You encounter {}!",
                adversary.name().with_indefinite_article(Capitalization::None)
            ));
            tracing::info!(adversary = %adversary.name(), health = adversary.health(), "encounter started");

            while !player.is_dead() && !adversary.is_dead() {
                rounds += 1;
                out.write_line(&format!("You have {} health.", player.display_health()));
                out.write_line(&format!(
                    "{} has {} health.",
                    adversary.name().with_definite_article(Capitalization::FirstLetter),
                    adversary.display_health()
                ));

                player.perform_turn(adversary, input, out)?;
                if adversary.is_dead() {
                    break;
                }

                adversary.perform_turn(player, dice, out);
            }

            // Also covers an adversary that arrived with no health left.
            if adversary.is_dead() {
                out.write_line(&format!(
                    "You defeat {}!",
                    adversary.name().with_definite_article(Capitalization::None)
                ));
                defeated += 1;
                tracing::info!(adversary = %adversary.name(), rounds, "encounter won");
            }
        }

        let outcome = if player.is_dead() {
            out.write_line("You have been defeated in battle!");
            Outcome::Defeat
        } else {
            out.write_line("Congratulations, you are victorious!");
            Outcome::Victory
        };
        tracing::info!(?outcome, defeated, rounds, "battle finished");

        Ok(BattleReport {
            outcome,
            adversaries_defeated: defeated,
            rounds,
            player_health: player.health(),
        })
    }
}
