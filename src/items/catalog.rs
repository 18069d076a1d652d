//! Shop catalog.

use super::types::{ArmorSlot, Item, ItemCategory, ItemKind, ItemPerk, PotionEffect, StatBonuses};

fn catalog_item(
    id: &str,
    name: &str,
    description: &str,
    kind: ItemKind,
    price: u32,
    effects: &[&str],
    bonuses: StatBonuses,
) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        kind,
        price,
        effects: effects.iter().map(|e| e.to_string()).collect(),
        bonuses,
        perk: None,
    }
}

/// Returns every item the shop sells, grouped weapons, armor, potions, artifacts.
pub fn get_shop_items() -> Vec<Item> {
    let none = StatBonuses::default();
    vec![
        catalog_item(
            "sword_basic",
            "Железный меч",
            "Простой, но надежный меч для начинающих героев.",
            ItemKind::Weapon,
            100,
            &["+5 к атаке"],
            StatBonuses {
                attack: 5,
                ..none
            },
        ),
        catalog_item(
            "sword_silver",
            "Серебряный меч",
            "Изящный меч, наносящий дополнительный урон нежити.",
            ItemKind::Weapon,
            250,
            &["+10 к атаке", "Дополнительный урон нежити"],
            StatBonuses {
                attack: 10,
                ..none
            },
        ),
        catalog_item(
            "staff_magic",
            "Магический посох",
            "Древний посох, усиливающий магические способности.",
            ItemKind::Weapon,
            300,
            &["+5 к атаке", "+8 к интеллекту"],
            StatBonuses {
                attack: 5,
                intelligence: 8,
                ..none
            },
        ),
        catalog_item(
            "armor_leather",
            "Кожаная броня",
            "Легкая броня, обеспечивающая базовую защиту.",
            ItemKind::Armor(ArmorSlot::Body),
            120,
            &["+5 к защите"],
            StatBonuses {
                defense: 5,
                ..none
            },
        ),
        catalog_item(
            "armor_chain",
            "Кольчуга",
            "Прочная кольчужная броня для серьезной защиты.",
            ItemKind::Armor(ArmorSlot::Body),
            280,
            &["+12 к защите", "-1 к скорости"],
            StatBonuses {
                defense: 12,
                ..none
            },
        ),
        catalog_item(
            "helmet_iron",
            "Железный шлем",
            "Надежный шлем, защищающий голову от ударов.",
            ItemKind::Armor(ArmorSlot::Head),
            150,
            &["+6 к защите"],
            StatBonuses {
                defense: 6,
                ..none
            },
        ),
        catalog_item(
            "potion_health",
            "Зелье здоровья",
            "Восстанавливает 30 очков здоровья при использовании.",
            ItemKind::Potion(PotionEffect::Health(30)),
            50,
            &["Восстанавливает 30 HP"],
            none,
        ),
        catalog_item(
            "potion_strength",
            "Зелье силы",
            "Навсегда увеличивает атаку на 2 очка.",
            ItemKind::Potion(PotionEffect::Attack(2)),
            200,
            &["Постоянно +2 к атаке"],
            none,
        ),
        catalog_item(
            "potion_intelligence",
            "Зелье мудрости",
            "Навсегда увеличивает интеллект на 2 очка.",
            ItemKind::Potion(PotionEffect::Intelligence(2)),
            200,
            &["Постоянно +2 к интеллекту"],
            none,
        ),
        Item {
            perk: Some(ItemPerk::OpeningReveal),
            ..catalog_item(
                "ring_knowledge",
                "Кольцо знаний",
                "Древнее кольцо, дающее подсказку в начале каждого боя.",
                ItemKind::Artifact,
                350,
                &["Открывает 1 букву в начале боя", "+3 к интеллекту"],
                StatBonuses {
                    intelligence: 3,
                    ..none
                },
            )
        },
        catalog_item(
            "amulet_life",
            "Амулет жизни",
            "Защитный амулет, увеличивающий максимальное здоровье.",
            ItemKind::Artifact,
            400,
            &["+20 к максимальному здоровью"],
            StatBonuses {
                max_health: 20,
                ..none
            },
        ),
        Item {
            perk: Some(ItemPerk::ExtraAttempts(1)),
            ..catalog_item(
                "gloves_dexterity",
                "Перчатки ловкости",
                "Магические перчатки, позволяющие делать на одну ошибку больше в бою.",
                ItemKind::Artifact,
                450,
                &["+1 дополнительная попытка в бою", "+4 к защите"],
                StatBonuses {
                    defense: 4,
                    ..none
                },
            )
        },
    ]
}

/// Look up a catalog item by id.
pub fn get_shop_item(id: &str) -> Option<Item> {
    get_shop_items().into_iter().find(|item| item.id == id)
}

/// Catalog items of one category, in catalog order.
pub fn shop_items_in(category: ItemCategory) -> Vec<Item> {
    get_shop_items()
        .into_iter()
        .filter(|item| item.category() == category)
        .collect()
}
