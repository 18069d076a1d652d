use serde::{Deserialize, Serialize};

/// Coarse item grouping used by the shop and inventory tabs and by
/// the one-per-kind equip rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Potion,
    Artifact,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 4] = [
        ItemCategory::Weapon,
        ItemCategory::Armor,
        ItemCategory::Potion,
        ItemCategory::Artifact,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ItemCategory::Weapon => "Оружие",
            ItemCategory::Armor => "Броня",
            ItemCategory::Potion => "Зелья",
            ItemCategory::Artifact => "Артефакты",
        }
    }
}

/// Armor sub-slot. Each slot holds at most one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArmorSlot {
    Head,
    Body,
}

/// One-shot potion effect with its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PotionEffect {
    /// Restores health, capped at max health.
    Health(u32),
    /// Raises max health and current health by the same amount.
    MaxHealth(u32),
    Attack(u32),
    Defense(u32),
    Intelligence(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon,
    Armor(ArmorSlot),
    Artifact,
    Potion(PotionEffect),
}

impl ItemKind {
    pub fn category(&self) -> ItemCategory {
        match self {
            ItemKind::Weapon => ItemCategory::Weapon,
            ItemKind::Armor(_) => ItemCategory::Armor,
            ItemKind::Artifact => ItemCategory::Artifact,
            ItemKind::Potion(_) => ItemCategory::Potion,
        }
    }
}

/// Passive stat deltas granted while an item is equipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBonuses {
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub intelligence: u32,
    #[serde(default)]
    pub max_health: u32,
}

impl StatBonuses {
    pub fn add(&mut self, other: &StatBonuses) {
        self.attack += other.attack;
        self.defense += other.defense;
        self.intelligence += other.intelligence;
        self.max_health += other.max_health;
    }
}

/// Battle-time property of an equipped artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemPerk {
    /// Raises the wrong-guess limit of every encounter.
    ExtraAttempts(u32),
    /// Reveals one letter when an encounter starts.
    OpeningReveal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: ItemKind,
    pub price: u32,
    /// Display lines for the shop card.
    #[serde(default)]
    pub effects: Vec<String>,
    #[serde(default)]
    pub bonuses: StatBonuses,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perk: Option<ItemPerk>,
}

impl Item {
    pub fn category(&self) -> ItemCategory {
        self.kind.category()
    }

    pub fn is_potion(&self) -> bool {
        matches!(self.kind, ItemKind::Potion(_))
    }

    pub fn armor_slot(&self) -> Option<ArmorSlot> {
        match self.kind {
            ItemKind::Armor(slot) => Some(slot),
            _ => None,
        }
    }

    /// Bonuses this item grants while equipped. Potions grant none.
    pub fn passive_bonuses(&self) -> StatBonuses {
        if self.is_potion() {
            StatBonuses::default()
        } else {
            self.bonuses
        }
    }

    /// Whether equipping `self` would displace `other`.
    pub fn conflicts_with(&self, other: &Item) -> bool {
        match (self.kind, other.kind) {
            (ItemKind::Weapon, ItemKind::Weapon) => true,
            (ItemKind::Artifact, ItemKind::Artifact) => true,
            (ItemKind::Armor(a), ItemKind::Armor(b)) => a == b,
            _ => false,
        }
    }
}
