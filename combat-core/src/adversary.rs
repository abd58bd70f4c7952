//! Non-player combatants and the strategies they fight with.
//!
//! Every adversary owns a [`Behavior`], a closed set of strategies that
//! share one capability: take a combat turn against the player. Each
//! variant is its own struct and keeps whatever private state it needs.
//! A new kind of adversary is one more struct with a `perform_turn`
//! and one more match arm in [`Behavior::perform_turn`].

use crate::dice::Dice;
use crate::entity::Entity;
use crate::io::OutputSink;
use crate::naming::{Capitalization, IndefiniteArticle, Name};
use crate::player::Player;

/// Placeholder replaced by the adversary's capitalized definite name.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Fill a flavor template with an adversary name.
pub fn render_flavor(template: &str, name: &Name) -> String {
    template.replace(
        NAME_PLACEHOLDER,
        &name.with_definite_article(Capitalization::FirstLetter),
    )
}

// ============================================================================
// Behaviors
// ============================================================================

/// Hits for the same amount every turn.
#[derive(Debug, Clone)]
pub struct Striker {
    attack_power: u32,
    flavor: String,
}

impl Striker {
    pub fn new(attack_power: u32, flavor: impl Into<String>) -> Self {
        Self {
            attack_power,
            flavor: flavor.into(),
        }
    }

    pub fn attack_power(&self) -> u32 {
        self.attack_power
    }

    fn perform_turn(&mut self, name: &Name, player: &mut Player, out: &mut dyn OutputSink) {
        out.write_line(&render_flavor(&self.flavor, name));
        player.take_damage(self.attack_power, out);
    }
}

/// Fatigue state of a [`Frenzy`] adversary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stamina {
    #[default]
    Ready,
    Tired,
}

/// Attacks for double damage, then spends a turn recovering.
#[derive(Debug, Clone)]
pub struct Frenzy {
    attack_power: u32,
    stamina: Stamina,
}

impl Frenzy {
    pub fn new(attack_power: u32) -> Self {
        Self {
            attack_power,
            stamina: Stamina::Ready,
        }
    }

    pub fn attack_power(&self) -> u32 {
        self.attack_power
    }

    pub fn stamina(&self) -> Stamina {
        self.stamina
    }

    fn perform_turn(&mut self, name: &Name, player: &mut Player, out: &mut dyn OutputSink) {
        let the_name = name.with_definite_article(Capitalization::FirstLetter);
        match self.stamina {
            Stamina::Ready => {
                out.write_line(&format!("{the_name} wildly attacks you with its claws!"));
                player.take_damage(self.attack_power.saturating_mul(2), out);
                out.write_line(&format!("{the_name} looks exhausted..."));
                self.stamina = Stamina::Tired;
            }
            Stamina::Tired => {
                out.write_line(&format!("{the_name} is too exhausted to attack."));
                self.stamina = Stamina::Ready;
            }
        }
        tracing::debug!(adversary = %name, stamina = ?self.stamina, "frenzy state changed");
    }
}

/// Hits for the same amount every turn with a randomly chosen taunt.
#[derive(Debug, Clone)]
pub struct Taunting {
    attack_power: u32,
    taunts: Vec<String>,
}

impl Taunting {
    /// Returns `None` if `taunts` is empty.
    pub fn new(attack_power: u32, taunts: Vec<String>) -> Option<Self> {
        if taunts.is_empty() {
            return None;
        }
        Some(Self {
            attack_power,
            taunts,
        })
    }

    pub fn attack_power(&self) -> u32 {
        self.attack_power
    }

    pub fn taunts(&self) -> &[String] {
        &self.taunts
    }

    fn perform_turn(
        &mut self,
        name: &Name,
        player: &mut Player,
        dice: &mut Dice,
        out: &mut dyn OutputSink,
    ) {
        if let Some(taunt) = dice.pick(&self.taunts) {
            out.write_line(&render_flavor(taunt, name));
        }
        player.take_damage(self.attack_power, out);
    }
}

/// How an adversary spends its turn.
#[derive(Debug, Clone)]
pub enum Behavior {
    Striker(Striker),
    Frenzy(Frenzy),
    Taunting(Taunting),
}

impl Behavior {
    pub fn perform_turn(
        &mut self,
        name: &Name,
        player: &mut Player,
        dice: &mut Dice,
        out: &mut dyn OutputSink,
    ) {
        match self {
            Behavior::Striker(b) => b.perform_turn(name, player, out),
            Behavior::Frenzy(b) => b.perform_turn(name, player, out),
            Behavior::Taunting(b) => b.perform_turn(name, player, dice, out),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Behavior::Striker(_) => "striker",
            Behavior::Frenzy(_) => "frenzy",
            Behavior::Taunting(_) => "taunting",
        }
    }
}

impl From<Striker> for Behavior {
    fn from(b: Striker) -> Self {
        Behavior::Striker(b)
    }
}

impl From<Frenzy> for Behavior {
    fn from(b: Frenzy) -> Self {
        Behavior::Frenzy(b)
    }
}

impl From<Taunting> for Behavior {
    fn from(b: Taunting) -> Self {
        Behavior::Taunting(b)
    }
}

// ============================================================================
// Adversary
// ============================================================================

/// A non-player combatant.
#[derive(Debug, Clone)]
pub struct Adversary {
    entity: Entity,
    behavior: Behavior,
}

impl Adversary {
    pub fn new(name: Name, starting_health: i32, behavior: impl Into<Behavior>) -> Self {
        Self {
            entity: Entity::new(name, starting_health),
            behavior: behavior.into(),
        }
    }

    pub fn name(&self) -> &Name {
        self.entity.name()
    }

    pub fn health(&self) -> i32 {
        self.entity.health()
    }

    pub fn display_health(&self) -> i32 {
        self.entity.display_health()
    }

    pub fn is_dead(&self) -> bool {
        self.entity.is_dead()
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Take damage, announcing it first.
    pub fn take_damage(&mut self, amount: u32, out: &mut dyn OutputSink) {
        out.write_line(&format!(
            "{} takes {amount} damage.",
            self.name().with_definite_article(Capitalization::FirstLetter)
        ));
        self.entity.take_damage(amount);
    }

    /// Take one combat turn against the player.
    pub fn perform_turn(&mut self, player: &mut Player, dice: &mut Dice, out: &mut dyn OutputSink) {
        let Self { entity, behavior } = self;
        behavior.perform_turn(entity.name(), player, dice, out);
    }
}

// ============================================================================
// Bestiary
// ============================================================================

/// A mace-swinging goblin: 4 health, hits for 2.
pub fn goblin() -> Adversary {
    Adversary::new(
        Name::generic("goblin", IndefiniteArticle::A),
        4,
        Striker::new(2, "{name} swings its mace at you!"),
    )
}

/// A goblin that alternates between double-damage frenzies and rest.
pub fn raging_goblin() -> Adversary {
    Adversary::new(
        Name::generic("raging goblin", IndefiniteArticle::A),
        6,
        Frenzy::new(2),
    )
}

/// A scrap robot with a couple of attack lines.
pub fn trash_bot() -> Adversary {
    let taunts = vec![
        "{name} throws a steel bolt at you!".to_string(),
        "{name} drives over your toes! Owch!".to_string(),
    ];
    Adversary::new(
        Name::generic("trash bot", IndefiniteArticle::A),
        5,
        Behavior::Taunting(Taunting { attack_power: 2, taunts }),
    )
}

/// Names of all preset adversaries.
pub const PRESETS: &[&str] = &["goblin", "raging goblin", "trash bot"];

/// Look up a preset adversary by name (case-insensitive).
pub fn find_preset(name: &str) -> Option<Adversary> {
    match name.trim().to_lowercase().as_str() {
        "goblin" => Some(goblin()),
        "raging goblin" => Some(raging_goblin()),
        "trash bot" => Some(trash_bot()),
        _ => None,
    }
}
