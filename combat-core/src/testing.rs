//! Testing utilities for the combat engine.
//!
//! This module provides tools for integration testing:
//! - `ScriptedInput` for deterministic player choices without a terminal
//! - `Transcript` for capturing and inspecting game messages
//! - `TestHarness` for scripted battles
//! - Assertion helpers for verifying transcripts and outcomes

use crate::adversary::Adversary;
use crate::dice::Dice;
use crate::engine::{BattleReport, CombatEngine, CombatError, Outcome};
use crate::io::{InputError, InputProvider, OutputSink};
use crate::player::Player;
use std::collections::VecDeque;

/// One scripted keyboard answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedReply {
    Number(i64),
    /// Raw text that will fail to parse as a number.
    Text(String),
}

/// An input provider that replays a fixed script.
///
/// Once the script runs out every read reports [`InputError::Closed`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    replies: VecDeque<ScriptedReply>,
    reads: usize,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script made only of numbers.
    pub fn numbers(numbers: impl IntoIterator<Item = i64>) -> Self {
        Self {
            replies: numbers.into_iter().map(ScriptedReply::Number).collect(),
            reads: 0,
        }
    }

    /// Queue a number.
    pub fn number(mut self, n: i64) -> Self {
        self.replies.push_back(ScriptedReply::Number(n));
        self
    }

    /// Queue some text that isn't a number.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.replies.push_back(ScriptedReply::Text(text.into()));
        self
    }

    /// Replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }

    /// How many reads were attempted, including failed ones.
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl InputProvider for ScriptedInput {
    fn read_integer(&mut self) -> Result<i64, InputError> {
        self.reads += 1;
        match self.replies.pop_front() {
            Some(ScriptedReply::Number(n)) => Ok(n),
            Some(ScriptedReply::Text(text)) => crate::io::parse_integer(&text),
            None => Err(InputError::Closed),
        }
    }
}

/// An output sink that records every line.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Whether any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    /// Number of lines containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.lines.iter().filter(|l| l.contains(needle)).count()
    }

    /// Index of the first line containing `needle`.
    pub fn position_of(&self, needle: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.contains(needle))
    }

    /// Index of the last line containing `needle`.
    pub fn last_position_of(&self, needle: &str) -> Option<usize> {
        self.lines.iter().rposition(|l| l.contains(needle))
    }

    /// Everything joined with newlines, for failure messages.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl OutputSink for Transcript {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Test harness for running scripted battles.
pub struct TestHarness {
    /// The engine under test.
    pub engine: CombatEngine,
    /// Player choices fed to the engine.
    pub input: ScriptedInput,
    /// Everything the engine wrote.
    pub transcript: Transcript,
}

impl TestHarness {
    /// A harness with seeded dice and an empty script.
    pub fn new(player: Player, adversaries: Vec<Adversary>) -> Self {
        Self {
            engine: CombatEngine::new(player, adversaries, Dice::seeded(0)),
            input: ScriptedInput::new(),
            transcript: Transcript::new(),
        }
    }

    /// Queue player menu choices.
    pub fn choose(&mut self, choices: impl IntoIterator<Item = i64>) -> &mut Self {
        for n in choices {
            self.input.replies.push_back(ScriptedReply::Number(n));
        }
        self
    }

    /// Queue text that won't parse as a number.
    pub fn type_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.input.replies.push_back(ScriptedReply::Text(text.into()));
        self
    }

    /// Run the battle to completion.
    pub fn run(&mut self) -> Result<BattleReport, CombatError> {
        self.engine.run(&mut self.input, &mut self.transcript)
    }

    pub fn player(&self) -> &Player {
        self.engine.player()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that the transcript has a line containing `needle`.
#[track_caller]
pub fn assert_said(transcript: &Transcript, needle: &str) {
    assert!(
        transcript.contains(needle),
        "Expected transcript to contain '{needle}', got:\n{}",
        transcript.text()
    );
}

/// Assert that the transcript has no line containing `needle`.
#[track_caller]
pub fn assert_not_said(transcript: &Transcript, needle: &str) {
    assert!(
        !transcript.contains(needle),
        "Expected transcript NOT to contain '{needle}', got:\n{}",
        transcript.text()
    );
}

/// Assert that `needles` first appear in the given order.
#[track_caller]
pub fn assert_said_in_order(transcript: &Transcript, needles: &[&str]) {
    let mut last = None;
    for needle in needles {
        let pos = transcript
            .position_of(needle)
            .unwrap_or_else(|| panic!("Expected transcript to contain '{needle}'"));
        if let Some((prev_needle, prev)) = last {
            assert!(
                pos > prev,
                "Expected '{needle}' (line {pos}) after '{prev_needle}' (line {prev})"
            );
        }
        last = Some((needle, pos));
    }
}

/// Assert the battle ended the expected way.
#[track_caller]
pub fn assert_outcome(report: &BattleReport, outcome: Outcome) {
    assert_eq!(
        report.outcome, outcome,
        "Expected {outcome:?}, got {:?} ({report:?})",
        report.outcome
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_replays() {
        let mut input = ScriptedInput::new().number(2).text("nope").number(-1);

        assert_eq!(input.read_integer().unwrap(), 2);
        assert!(matches!(input.read_integer(), Err(InputError::NotANumber(_))));
        assert_eq!(input.read_integer().unwrap(), -1);
        assert!(matches!(input.read_integer(), Err(InputError::Closed)));
        assert_eq!(input.reads(), 4);
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_transcript_queries() {
        let mut t = Transcript::new();
        t.write_line("You have 10 health.");
        t.blank_line();
        t.write_line("You have 8 health.");

        assert_eq!(t.lines().len(), 3);
        assert_eq!(t.count("You have"), 2);
        assert_eq!(t.position_of("health"), Some(0));
        assert_eq!(t.last_position_of("health"), Some(2));
        assert!(!t.contains("goblin"));
        assert_said_in_order(&t, &["10 health", "8 health"]);
    }
}
