//! Shared state for every combat participant.

use crate::naming::Name;

/// Anything in combat with a name and health.
///
/// Health may go below zero; callers clamp with [`Entity::display_health`]
/// when showing it to the player.
#[derive(Debug, Clone)]
pub struct Entity {
    name: Name,
    health: i32,
}

impl Entity {
    pub fn new(name: Name, starting_health: i32) -> Self {
        Self {
            name,
            health: starting_health,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Health as shown in messages, never negative.
    pub fn display_health(&self) -> i32 {
        self.health.max(0)
    }

    /// Subtract health. There is no floor.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(clamp_amount(amount));
    }

    /// Add health. There is no ceiling.
    pub fn restore_health(&mut self, amount: u32) {
        self.health = self.health.saturating_add(clamp_amount(amount));
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

fn clamp_amount(amount: u32) -> i32 {
    i32::try_from(amount).unwrap_or(i32::MAX)
}
