//! Playable character classes and their abilities.

/// Class abilities. Each class knows two; an encounter allows one use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbilityKind {
    /// Heavy blow for 1.5x attack.
    WarriorStrike,
    /// Two extra wrong guesses for the rest of the encounter.
    WarriorEndurance,
    /// Reveals up to three letters.
    MageReveal,
    /// Damage scaled by intelligence.
    MageFireball,
    /// Heals 30% of max health.
    RogueDodge,
    /// Chance of bonus gold on victory.
    RoguePickpocket,
}

impl AbilityKind {
    pub const ALL: [AbilityKind; 6] = [
        AbilityKind::WarriorStrike,
        AbilityKind::WarriorEndurance,
        AbilityKind::MageReveal,
        AbilityKind::MageFireball,
        AbilityKind::RogueDodge,
        AbilityKind::RoguePickpocket,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            AbilityKind::WarriorStrike => "warrior_strike",
            AbilityKind::WarriorEndurance => "warrior_endurance",
            AbilityKind::MageReveal => "mage_reveal",
            AbilityKind::MageFireball => "mage_fireball",
            AbilityKind::RogueDodge => "rogue_dodge",
            AbilityKind::RoguePickpocket => "rogue_pickpocket",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Ability {
    pub kind: AbilityKind,
    pub name: &'static str,
    pub description: &'static str,
}

/// A stat bar shown on the class picker (value out of 5).
#[derive(Debug, Clone, Copy)]
pub struct StatBar {
    pub name: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone)]
pub struct CharacterClass {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub avatar: &'static str,
    pub base_health: u32,
    pub base_attack: u32,
    pub base_defense: u32,
    pub base_intelligence: u32,
    pub stat_bars: Vec<StatBar>,
    pub abilities: Vec<Ability>,
}

impl CharacterClass {
    pub fn has_ability(&self, kind: AbilityKind) -> bool {
        self.abilities.iter().any(|a| a.kind == kind)
    }
}

fn bars(health: u32, attack: u32, defense: u32, intelligence: u32) -> Vec<StatBar> {
    vec![
        StatBar {
            name: "Здоровье",
            value: health,
        },
        StatBar {
            name: "Атака",
            value: attack,
        },
        StatBar {
            name: "Защита",
            value: defense,
        },
        StatBar {
            name: "Интеллект",
            value: intelligence,
        },
    ]
}

/// Returns all playable classes in picker order.
pub fn get_character_classes() -> Vec<CharacterClass> {
    vec![
        CharacterClass {
            id: "warrior",
            name: "Воин",
            description: "Мастер ближнего боя, способный выдержать больше ударов и наносить мощные атаки.",
            avatar: "https://images.unsplash.com/photo-1608889825205-eebdb9fc5806?q=80&w=500&auto=format&fit=crop",
            base_health: 100,
            base_attack: 15,
            base_defense: 10,
            base_intelligence: 5,
            stat_bars: bars(5, 4, 4, 2),
            abilities: vec![
                Ability {
                    kind: AbilityKind::WarriorStrike,
                    name: "Мощный удар",
                    description: "Наносит дополнительный урон врагу, игнорируя часть его защиты.",
                },
                Ability {
                    kind: AbilityKind::WarriorEndurance,
                    name: "Выносливость",
                    description: "Позволяет выдержать на 2 ошибки больше в словесных сражениях.",
                },
            ],
        },
        CharacterClass {
            id: "mage",
            name: "Маг",
            description: "Мудрый заклинатель, использующий силу слов для создания мощных заклинаний.",
            avatar: "https://images.unsplash.com/photo-1618336753974-aae8e04506aa?q=80&w=500&auto=format&fit=crop",
            base_health: 70,
            base_attack: 8,
            base_defense: 5,
            base_intelligence: 15,
            stat_bars: bars(3, 2, 2, 5),
            abilities: vec![
                Ability {
                    kind: AbilityKind::MageReveal,
                    name: "Откровение",
                    description: "Открывает несколько случайных букв в загаданном слове.",
                },
                Ability {
                    kind: AbilityKind::MageFireball,
                    name: "Огненный шар",
                    description: "Наносит урон, пропорциональный интеллекту мага.",
                },
            ],
        },
        CharacterClass {
            id: "rogue",
            name: "Разбойник",
            description: "Ловкий и хитрый персонаж, способный находить слабые места противника.",
            avatar: "https://images.unsplash.com/photo-1581977012607-4091712d36f9?q=80&w=500&auto=format&fit=crop",
            base_health: 80,
            base_attack: 12,
            base_defense: 7,
            base_intelligence: 10,
            stat_bars: bars(3, 4, 3, 3),
            abilities: vec![
                Ability {
                    kind: AbilityKind::RogueDodge,
                    name: "Уклонение",
                    description: "Восстанавливает часть здоровья, избегая урона от врага.",
                },
                Ability {
                    kind: AbilityKind::RoguePickpocket,
                    name: "Карманная кража",
                    description: "Шанс получить дополнительное золото после победы над врагом.",
                },
            ],
        },
    ]
}

pub fn get_character_class(id: &str) -> Option<CharacterClass> {
    get_character_classes().into_iter().find(|c| c.id == id)
}
