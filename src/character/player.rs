use super::classes::CharacterClass;
use crate::core::constants::*;
use crate::items::types::{Item, ItemCategory, ItemPerk, StatBonuses};
use serde::{Deserialize, Serialize};

/// Lifetime counters shown on the character sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub battles_won: u32,
    pub battles_lost: u32,
    pub words_guessed: u32,
    pub hints_used: u32,
}

/// Persisted player profile.
///
/// `equipped` holds item ids; the item data lives once, in `inventory`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub class_id: String,
    pub level: u32,
    pub experience: u64,
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub intelligence: u32,
    pub gold: u32,
    pub inventory: Vec<Item>,
    pub equipped: Vec<String>,
    pub stats: PlayerStats,
    #[serde(default)]
    pub last_save_time: i64,
}

/// Base stats plus the passive bonuses of equipped items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveStats {
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub intelligence: u32,
}

impl Player {
    /// Creates a level 1 character seeded from the class base stats.
    pub fn new(name: String, class: &CharacterClass) -> Self {
        use uuid::Uuid;

        Self {
            id: Uuid::new_v4().to_string(),
            name,
            class_id: class.id.to_string(),
            level: STARTING_LEVEL,
            experience: 0,
            health: class.base_health,
            max_health: class.base_health,
            attack: class.base_attack,
            defense: class.base_defense,
            intelligence: class.base_intelligence,
            gold: STARTING_GOLD,
            inventory: Vec::new(),
            equipped: Vec::new(),
            stats: PlayerStats::default(),
            last_save_time: 0,
        }
    }

    pub fn find_item(&self, item_id: &str) -> Option<&Item> {
        self.inventory.iter().find(|item| item.id == item_id)
    }

    pub fn is_equipped(&self, item_id: &str) -> bool {
        self.equipped.iter().any(|id| id == item_id)
    }

    /// Equipped items, resolved against the inventory.
    pub fn equipped_items(&self) -> impl Iterator<Item = &Item> {
        self.equipped.iter().filter_map(|id| self.find_item(id))
    }

    pub fn items_of_category(&self, category: ItemCategory) -> Vec<&Item> {
        self.inventory
            .iter()
            .filter(|item| item.category() == category)
            .collect()
    }

    pub fn equipment_bonuses(&self) -> StatBonuses {
        let mut total = StatBonuses::default();
        for item in self.equipped_items() {
            total.add(&item.passive_bonuses());
        }
        total
    }

    pub fn effective_stats(&self) -> EffectiveStats {
        let bonus = self.equipment_bonuses();
        EffectiveStats {
            max_health: self.max_health + bonus.max_health,
            attack: self.attack + bonus.attack,
            defense: self.defense + bonus.defense,
            intelligence: self.intelligence + bonus.intelligence,
        }
    }

    /// Extra wrong guesses allowed per word from equipped perks.
    pub fn extra_attempts(&self) -> u32 {
        self.equipped_items()
            .filter_map(|item| match item.perk {
                Some(ItemPerk::ExtraAttempts(n)) => Some(n),
                _ => None,
            })
            .sum()
    }

    pub fn has_opening_reveal(&self) -> bool {
        self.equipped_items()
            .any(|item| item.perk == Some(ItemPerk::OpeningReveal))
    }

    /// Experience total at which the next level-up fires.
    pub fn xp_for_next_level(&self) -> u64 {
        self.level as u64 * XP_PER_LEVEL
    }
}
