//! Shop and inventory operations on a player's gold, inventory, and equipment.

use super::types::{Item, ItemKind, PotionEffect};
use crate::character::player::Player;
use crate::core::constants::SELL_PRICE_DIVISOR;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("not enough gold: item costs {price}, player has {gold}")]
    NotEnoughGold { price: u32, gold: u32 },

    #[error("item not in inventory: {0}")]
    ItemNotFound(String),

    #[error("item is not equipped: {0}")]
    NotEquipped(String),
}

/// What equipping an item did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquipOutcome {
    /// A potion was drunk and removed from the inventory.
    Consumed(PotionEffect),
    /// The item is now equipped; `replaced` lists the ids it displaced.
    Equipped { replaced: Vec<String> },
}

pub fn sell_price(item: &Item) -> u32 {
    item.price / SELL_PRICE_DIVISOR
}

pub fn can_afford(player: &Player, item: &Item) -> bool {
    player.gold >= item.price
}

/// Buys a copy of `item`. Duplicates of the same id are allowed.
pub fn buy(player: &mut Player, item: &Item) -> Result<(), LedgerError> {
    if !can_afford(player, item) {
        return Err(LedgerError::NotEnoughGold {
            price: item.price,
            gold: player.gold,
        });
    }
    player.gold -= item.price;
    player.inventory.push(item.clone());
    Ok(())
}

/// Sells one copy of the item for half its price. Returns the refund.
pub fn sell(player: &mut Player, item_id: &str) -> Result<u32, LedgerError> {
    let index = inventory_index(player, item_id)?;
    let item = player.inventory.remove(index);
    let refund = sell_price(&item);
    player.gold += refund;

    if player.find_item(item_id).is_none() {
        player.equipped.retain(|id| id != item_id);
    }
    Ok(refund)
}

/// Equips an item, or drinks it if it is a potion.
///
/// Weapons and artifacts displace the equipped item of the same kind;
/// armor displaces only the piece in the same slot.
pub fn equip(player: &mut Player, item_id: &str) -> Result<EquipOutcome, LedgerError> {
    let index = inventory_index(player, item_id)?;

    if let ItemKind::Potion(effect) = player.inventory[index].kind {
        player.inventory.remove(index);
        apply_potion(player, effect);
        return Ok(EquipOutcome::Consumed(effect));
    }

    let item = player.inventory[index].clone();
    let replaced: Vec<String> = player
        .equipped_items()
        .filter(|other| other.id != item.id && item.conflicts_with(other))
        .map(|other| other.id.clone())
        .collect();
    player.equipped.retain(|id| !replaced.contains(id));

    if !player.is_equipped(item_id) {
        player.equipped.push(item.id);
    }
    Ok(EquipOutcome::Equipped { replaced })
}

pub fn unequip(player: &mut Player, item_id: &str) -> Result<(), LedgerError> {
    if !player.is_equipped(item_id) {
        return Err(LedgerError::NotEquipped(item_id.to_string()));
    }
    player.equipped.retain(|id| id != item_id);
    Ok(())
}

/// Advisory check for the inventory screen: potions are always usable,
/// equipment only when nothing of the same kind (or armor slot) is equipped.
pub fn can_equip(player: &Player, item: &Item) -> bool {
    if item.is_potion() {
        return true;
    }
    !player
        .equipped_items()
        .any(|other| item.conflicts_with(other))
}

pub fn apply_potion(player: &mut Player, effect: PotionEffect) {
    match effect {
        PotionEffect::Health(value) => {
            player.health = (player.health + value).min(player.max_health);
        }
        PotionEffect::MaxHealth(value) => {
            player.max_health += value;
            player.health += value;
        }
        PotionEffect::Attack(value) => player.attack += value,
        PotionEffect::Defense(value) => player.defense += value,
        PotionEffect::Intelligence(value) => player.intelligence += value,
    }
}

fn inventory_index(player: &Player, item_id: &str) -> Result<usize, LedgerError> {
    player
        .inventory
        .iter()
        .position(|item| item.id == item_id)
        .ok_or_else(|| LedgerError::ItemNotFound(item_id.to_string()))
}
