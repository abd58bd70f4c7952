//! The player character and their turn.
//!
//! A player turn is a small state machine: prompt until the input
//! names a valid [`ActionChoice`], narrow it to a [`CombatAction`]
//! (which may involve the item sub-menu), then resolve that action
//! against the adversary.

use crate::adversary::Adversary;
use crate::entity::Entity;
use crate::io::{InputError, InputProvider, OutputSink};
use crate::inventory::{Inventory, InventoryError};
use crate::items::Item;
use crate::naming::{Capitalization, Name};
use thiserror::Error;

/// Fraction of incoming damage stopped while blocking, in tenths.
pub const BLOCK_TENTHS: u64 = 6;

/// Item sub-menu answer that backs out to the main menu.
pub const CANCEL_ITEM: i64 = -1;

/// Errors that end a player turn abnormally.
#[derive(Debug, Error)]
pub enum TurnError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),
}

/// Top-level menu options, numbered as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionChoice {
    Attack,
    Defend,
    UseItem,
    Flee,
}

impl ActionChoice {
    pub const ALL: [ActionChoice; 4] = [
        ActionChoice::Attack,
        ActionChoice::Defend,
        ActionChoice::UseItem,
        ActionChoice::Flee,
    ];

    pub fn from_number(n: i64) -> Option<Self> {
        usize::try_from(n).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn number(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            ActionChoice::Attack => "Attack",
            ActionChoice::Defend => "Defend",
            ActionChoice::UseItem => "Use an item",
            ActionChoice::Flee => "Run away",
        }
    }
}

/// A fully chosen action, ready to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatAction {
    Attack,
    Defend,
    UseItem(usize),
    Flee,
}

/// The player character.
#[derive(Debug, Clone)]
pub struct Player {
    entity: Entity,
    attack_power: u32,
    blocking: bool,
    inventory: Inventory,
}

impl Player {
    pub fn new(name: Name, starting_health: i32, attack_power: u32) -> Self {
        Self::with_items(name, starting_health, attack_power, Vec::new())
    }

    pub fn with_items(
        name: Name,
        starting_health: i32,
        attack_power: u32,
        items: impl IntoIterator<Item = Item>,
    ) -> Self {
        Self {
            entity: Entity::new(name, starting_health),
            attack_power,
            blocking: false,
            inventory: Inventory::from_items(items),
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

    pub fn attack_power(&self) -> u32 {
        self.attack_power
    }

    pub fn is_blocking(&self) -> bool {
        self.blocking
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Take damage, reduced by 60% (rounded down) while blocking.
    pub fn take_damage(&mut self, amount: u32, out: &mut dyn OutputSink) {
        let blocked = if self.blocking {
            blocked_amount(amount)
        } else {
            0
        };
        let net = amount - blocked;

        if blocked > 0 {
            out.write_line(&format!("You take {net} damage (blocked {blocked} damage)."));
        } else {
            out.write_line(&format!("You take {net} damage."));
        }
        tracing::debug!(incoming = amount, blocked, net, "player hit");

        self.entity.take_damage(net);
    }

    pub fn restore_health(&mut self, amount: u32, out: &mut dyn OutputSink) {
        out.write_line(&format!("You restore {amount} hitpoints."));
        self.entity.restore_health(amount);
    }

    /// Play one turn against `adversary`.
    ///
    /// Bad menu input is re-prompted here; only a closed input stream or
    /// a broken inventory contract escapes as an error.
    pub fn perform_turn(
        &mut self,
        adversary: &mut Adversary,
        input: &mut dyn InputProvider,
        out: &mut dyn OutputSink,
    ) -> Result<CombatAction, TurnError> {
        self.blocking = false;

        let action = self.choose_action(input, out)?;
        out.blank_line();
        self.resolve(action, adversary, out)?;

        tracing::debug!(?action, "player action resolved");
        Ok(action)
    }

    fn resolve(
        &mut self,
        action: CombatAction,
        adversary: &mut Adversary,
        out: &mut dyn OutputSink,
    ) -> Result<(), TurnError> {
        match action {
            CombatAction::Attack => {
                out.write_line(&format!(
                    "You swing your sword at {}!",
                    adversary.name().with_definite_article(Capitalization::None)
                ));
                adversary.take_damage(self.attack_power, out);
            }
            CombatAction::Defend => {
                out.write_line("You raise your shield...");
                self.blocking = true;
            }
            CombatAction::UseItem(index) => {
                // The inventory needs the player mutably while it applies an item.
                let mut inventory = std::mem::take(&mut self.inventory);
                let result = inventory.use_item(index, self, adversary, out);
                self.inventory = inventory;
                result?;
            }
            CombatAction::Flee => {
                out.write_line(
                    "Heroes don't run from battle! (You lose your turn for being a coward...)",
                );
            }
        }
        Ok(())
    }

    fn choose_action(
        &self,
        input: &mut dyn InputProvider,
        out: &mut dyn OutputSink,
    ) -> Result<CombatAction, TurnError> {
        loop {
            out.blank_line();
            out.write_line("What would you like to do?");
            for choice in ActionChoice::ALL {
                if choice == ActionChoice::UseItem && self.inventory.is_empty() {
                    continue;
                }
                out.write_line(&format!("{} - {}", choice.number(), choice.label()));
            }

            let Some(number) = read_choice(input)? else {
                out.write_line("Unrecognized input. Please select one of the available actions by number.");
                continue;
            };

            let action = match ActionChoice::from_number(number) {
                Some(ActionChoice::Attack) => CombatAction::Attack,
                Some(ActionChoice::Defend) => CombatAction::Defend,
                Some(ActionChoice::Flee) => CombatAction::Flee,
                Some(ActionChoice::UseItem) if self.inventory.is_empty() => {
                    out.blank_line();
                    out.write_line("Your inventory is empty!");
                    continue;
                }
                Some(ActionChoice::UseItem) => match self.choose_item(input, out)? {
                    Some(index) => CombatAction::UseItem(index),
                    None => continue,
                },
                None => {
                    tracing::warn!(number, "menu choice out of range");
                    out.write_line("Unrecognized input. Please select one of the available actions by number.");
                    continue;
                }
            };
            return Ok(action);
        }
    }

    /// Item sub-menu. `None` means the player cancelled.
    fn choose_item(
        &self,
        input: &mut dyn InputProvider,
        out: &mut dyn OutputSink,
    ) -> Result<Option<usize>, TurnError> {
        loop {
            out.blank_line();
            out.write_line(&format!("Which item do you want to use? ({CANCEL_ITEM} to cancel)"));
            for entry in self.inventory.entries() {
                out.write_line(&format!(
                    "{} - {} ({})",
                    entry.index, entry.name, entry.description
                ));
            }

            match read_choice(input)? {
                Some(CANCEL_ITEM) => return Ok(None),
                Some(n) => {
                    if let Some(index) = usize::try_from(n).ok().filter(|i| *i < self.inventory.len()) {
                        return Ok(Some(index));
                    }
                    tracing::warn!(number = n, "item choice out of range");
                    out.write_line("Unrecognized input. Please select one of the available items by number.");
                }
                None => {
                    out.write_line("Unrecognized action. Please select one of the available options.");
                }
            }
        }
    }
}

/// Read a number, turning recoverable input errors into `None`.
fn read_choice(input: &mut dyn InputProvider) -> Result<Option<i64>, InputError> {
    match input.read_integer() {
        Ok(n) => Ok(Some(n)),
        Err(e) if e.is_recoverable() => {
            tracing::warn!(error = %e, "rejected player input");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Damage stopped by a block: 60% of `amount`, rounded down.
pub fn blocked_amount(amount: u32) -> u32 {
    // Fits: the result is never larger than `amount`.
    (u64::from(amount) * BLOCK_TENTHS / 10) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adversary;
    use crate::items::healing_potion;
    use crate::testing::{ScriptedInput, Transcript};

    fn hero() -> Player {
        Player::new(Name::specific("Ash"), 10, 3)
    }

    #[test]
    fn test_blocked_amount() {
        assert_eq!(blocked_amount(0), 0);
        assert_eq!(blocked_amount(1), 0);
        assert_eq!(blocked_amount(2), 1);
        assert_eq!(blocked_amount(4), 2);
        assert_eq!(blocked_amount(5), 3);
        assert_eq!(blocked_amount(10), 6);
        assert_eq!(blocked_amount(u32::MAX), 2_576_980_377);
    }

    #[test]
    fn test_action_choice_numbers() {
        assert_eq!(ActionChoice::from_number(0), Some(ActionChoice::Attack));
        assert_eq!(ActionChoice::from_number(3), Some(ActionChoice::Flee));
        assert_eq!(ActionChoice::from_number(4), None);
        assert_eq!(ActionChoice::from_number(-1), None);
        assert_eq!(ActionChoice::UseItem.number(), 2);
    }

    #[test]
    fn test_attack() {
        let mut player = hero();
        let mut goblin = adversary::goblin();
        let mut input = ScriptedInput::numbers([0]);
        let mut out = Transcript::new();

        let action = player.perform_turn(&mut goblin, &mut input, &mut out).unwrap();

        assert_eq!(action, CombatAction::Attack);
        assert_eq!(goblin.health(), 1);
        assert!(out.contains("You swing your sword at the goblin!"));
        assert!(out.contains("The goblin takes 3 damage."));
    }

    #[test]
    fn test_defend_blocks_damage() {
        let mut player = hero();
        let mut goblin = adversary::goblin();
        let mut input = ScriptedInput::numbers([1]);
        let mut out = Transcript::new();

        player.perform_turn(&mut goblin, &mut input, &mut out).unwrap();
        assert!(player.is_blocking());
        assert!(out.contains("You raise your shield..."));

        player.take_damage(4, &mut out);
        assert_eq!(player.health(), 8);
        assert!(out.contains("You take 2 damage (blocked 2 damage)."));
    }

    #[test]
    fn test_small_hit_while_blocking_reports_no_block() {
        let mut player = hero();
        let mut goblin = adversary::goblin();
        let mut input = ScriptedInput::numbers([1]);
        let mut out = Transcript::new();

        player.perform_turn(&mut goblin, &mut input, &mut out).unwrap();
        player.take_damage(1, &mut out);

        assert_eq!(player.health(), 9);
        assert_eq!(out.lines().last().unwrap(), "You take 1 damage.");
    }

    #[test]
    fn test_blocking_resets_next_turn() {
        let mut player = hero();
        let mut goblin = adversary::goblin();
        let mut input = ScriptedInput::numbers([1, 3]);
        let mut out = Transcript::new();

        player.perform_turn(&mut goblin, &mut input, &mut out).unwrap();
        assert!(player.is_blocking());

        player.perform_turn(&mut goblin, &mut input, &mut out).unwrap();
        assert!(!player.is_blocking());

        player.take_damage(5, &mut out);
        assert_eq!(player.health(), 5);
    }

    #[test]
    fn test_flee_is_flavor_only() {
        let mut player = hero();
        let mut goblin = adversary::goblin();
        let mut input = ScriptedInput::numbers([3]);
        let mut out = Transcript::new();

        let action = player.perform_turn(&mut goblin, &mut input, &mut out).unwrap();

        assert_eq!(action, CombatAction::Flee);
        assert_eq!(goblin.health(), 4);
        assert_eq!(player.health(), 10);
        assert!(out.contains("Heroes don't run from battle!"));
    }

    #[test]
    fn test_bad_input_reprompts() {
        let mut player = hero();
        let mut goblin = adversary::goblin();
        let mut input = ScriptedInput::new().text("fight").number(7).number(-3).number(0);
        let mut out = Transcript::new();

        let action = player.perform_turn(&mut goblin, &mut input, &mut out).unwrap();

        assert_eq!(action, CombatAction::Attack);
        assert_eq!(out.count("What would you like to do?"), 4);
        assert_eq!(
            out.count("Unrecognized input. Please select one of the available actions by number."),
            3
        );
    }

    #[test]
    fn test_use_item_hidden_when_empty() {
        let mut player = hero();
        let mut goblin = adversary::goblin();
        let mut input = ScriptedInput::numbers([2, 0]);
        let mut out = Transcript::new();

        let action = player.perform_turn(&mut goblin, &mut input, &mut out).unwrap();

        assert_eq!(action, CombatAction::Attack);
        assert!(!out.contains("2 - Use an item"));
        assert!(out.contains("Your inventory is empty!"));
    }

    #[test]
    fn test_use_item() {
        let mut player = Player::with_items(Name::specific("Ash"), 4, 3, [healing_potion()]);
        let mut goblin = adversary::goblin();
        let mut input = ScriptedInput::numbers([2, 0]);
        let mut out = Transcript::new();

        let action = player.perform_turn(&mut goblin, &mut input, &mut out).unwrap();

        assert_eq!(action, CombatAction::UseItem(0));
        assert_eq!(player.health(), 9);
        assert!(player.inventory().is_empty());
        assert!(out.contains("2 - Use an item"));
        assert!(out.contains("0 - healing potion (A potion that restores some hitpoints.)"));
        assert!(out.contains("You chug a healing potion."));
    }

    #[test]
    fn test_cancel_item_returns_to_menu() {
        let mut player = Player::with_items(Name::specific("Ash"), 4, 3, [healing_potion()]);
        let mut goblin = adversary::goblin();
        let mut input = ScriptedInput::numbers([2, CANCEL_ITEM, 1]);
        let mut out = Transcript::new();

        let action = player.perform_turn(&mut goblin, &mut input, &mut out).unwrap();

        assert_eq!(action, CombatAction::Defend);
        assert_eq!(player.inventory().len(), 1);
        assert_eq!(out.count("What would you like to do?"), 2);
    }

    #[test]
    fn test_bad_item_choice_reprompts() {
        let mut player = Player::with_items(Name::specific("Ash"), 4, 3, [healing_potion()]);
        let mut goblin = adversary::goblin();
        let mut input = ScriptedInput::new().number(2).number(5).text("potion").number(0);
        let mut out = Transcript::new();

        let action = player.perform_turn(&mut goblin, &mut input, &mut out).unwrap();

        assert_eq!(action, CombatAction::UseItem(0));
        assert_eq!(
            out.count("Unrecognized input. Please select one of the available items by number."),
            1
        );
        assert_eq!(
            out.count("Unrecognized action. Please select one of the available options."),
            1
        );
    }

    #[test]
    fn test_non_numeric_item_choice_message() {
        let mut player = Player::with_items(Name::specific("Ash"), 4, 3, [healing_potion()]);
        let mut goblin = adversary::goblin();
        let mut input = ScriptedInput::new().number(2).text("drink").number(CANCEL_ITEM).number(1);
        let mut out = Transcript::new();

        let action = player.perform_turn(&mut goblin, &mut input, &mut out).unwrap();

        assert_eq!(action, CombatAction::Defend);
        let idx = out
            .position_of("Unrecognized action. Please select one of the available options.")
            .unwrap();
        assert!(idx > out.position_of("Which item do you want to use?").unwrap());
        assert!(!out.contains("available items by number"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut player = hero();
        let mut goblin = adversary::goblin();
        let mut input = ScriptedInput::new();
        let mut out = Transcript::new();

        let err = player
            .perform_turn(&mut goblin, &mut input, &mut out)
            .unwrap_err();
        assert!(matches!(err, TurnError::Input(InputError::Closed)));
    }

    #[test]
    fn test_restore_health_message() {
        let mut player = hero();
        let mut out = Transcript::new();
        player.restore_health(5, &mut out);
        assert_eq!(player.health(), 15);
        assert_eq!(out.lines(), ["You restore 5 hitpoints."]);
    }
}
