//! The player's ordered bag of single-use items.

use crate::adversary::Adversary;
use crate::io::OutputSink;
use crate::items::Item;
use crate::naming::Name;
use crate::player::Player;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Item index {index} out of range (inventory holds {len})")]
    OutOfRange { index: usize, len: usize },
}

/// One row of an inventory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryEntry<'a> {
    pub index: usize,
    pub name: &'a Name,
    pub description: &'a str,
}

/// Items in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Use the item at `index` and remove it.
    ///
    /// An out-of-range index leaves the inventory untouched.
    pub fn use_item(
        &mut self,
        index: usize,
        player: &mut Player,
        adversary: &mut Adversary,
        out: &mut dyn OutputSink,
    ) -> Result<(), InventoryError> {
        if index >= self.items.len() {
            return Err(InventoryError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let item = self.items.remove(index);
        item.apply(player, adversary, out);
        Ok(())
    }

    /// List the items for display. Each call starts a fresh listing.
    pub fn entries(&self) -> impl Iterator<Item = InventoryEntry<'_>> + '_ {
        self.items.iter().enumerate().map(|(index, item)| InventoryEntry {
            index,
            name: &item.name,
            description: &item.description,
        })
    }
}
