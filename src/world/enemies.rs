//! Enemies on the world map.

#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub battle_background: &'static str,
    pub health: u32,
    pub attack: u32,
    pub defense: u32,
    pub exp_reward: u64,
    pub gold_reward: u32,
    pub word_category: &'static str,
    /// Prompt shown above the word, e.g. "guess the animal".
    pub word_prompt: &'static str,
    pub difficulty: u32,
    pub required_level: u32,
}

impl Enemy {
    /// Whether a player of `level` is still too weak to fight this enemy.
    pub fn is_locked_for(&self, level: u32) -> bool {
        self.required_level > level
    }
}

/// Returns every enemy in map order.
pub fn get_all_enemies() -> Vec<Enemy> {
    vec![
        Enemy {
            id: "goblin",
            name: "Гоблин-словоед",
            description: "Маленький зеленый гоблин, который питается буквами и слогами.",
            image: "https://images.unsplash.com/photo-1560942485-b2a11cc13456?q=80&w=500&auto=format&fit=crop",
            battle_background: "https://images.unsplash.com/photo-1518562180175-34a163b1a9a6?q=80&w=1000&auto=format&fit=crop",
            health: 50,
            attack: 8,
            defense: 5,
            exp_reward: 20,
            gold_reward: 15,
            word_category: "animals",
            word_prompt: "Угадай животное, чтобы атаковать гоблина:",
            difficulty: 1,
            required_level: 1,
        },
        Enemy {
            id: "skeleton",
            name: "Скелет-грамматик",
            description: "Оживший скелет, который когда-то был учителем языка.",
            image: "https://images.unsplash.com/photo-1604076913837-52ab5629fba9?q=80&w=500&auto=format&fit=crop",
            battle_background: "https://images.unsplash.com/photo-1635776062127-d379bfcba9f9?q=80&w=1000&auto=format&fit=crop",
            health: 70,
            attack: 10,
            defense: 8,
            exp_reward: 30,
            gold_reward: 25,
            word_category: "professions",
            word_prompt: "Угадай профессию, чтобы победить скелета:",
            difficulty: 2,
            required_level: 2,
        },
        Enemy {
            id: "troll",
            name: "Тролль-рифмоплет",
            description: "Огромный тролль, который любит загадывать сложные слова.",
            image: "https://images.unsplash.com/photo-1577741314755-048d8525d31e?q=80&w=500&auto=format&fit=crop",
            battle_background: "https://images.unsplash.com/photo-1518562180175-34a163b1a9a6?q=80&w=1000&auto=format&fit=crop",
            health: 100,
            attack: 15,
            defense: 12,
            exp_reward: 50,
            gold_reward: 40,
            word_category: "geography",
            word_prompt: "Угадай географическое название, чтобы одолеть тролля:",
            difficulty: 3,
            required_level: 3,
        },
        Enemy {
            id: "witch",
            name: "Ведьма слов",
            description: "Коварная ведьма, заколдовывающая буквы и превращающая их в ядовитые зелья.",
            image: "https://images.unsplash.com/photo-1515202913167-d9a698095ebf?q=80&w=500&auto=format&fit=crop",
            battle_background: "https://images.unsplash.com/photo-1509248961158-e54f6934749c?q=80&w=1000&auto=format&fit=crop",
            health: 85,
            attack: 12,
            defense: 10,
            exp_reward: 45,
            gold_reward: 35,
            word_category: "plants",
            word_prompt: "Угадай растение, чтобы противостоять магии ведьмы:",
            difficulty: 3,
            required_level: 4,
        },
        Enemy {
            id: "dragon",
            name: "Дракон-лингвист",
            description: "Древний дракон, хранитель забытых слов и редких выражений.",
            image: "https://images.unsplash.com/photo-1577741314755-048d8525d31e?q=80&w=500&auto=format&fit=crop",
            battle_background: "https://images.unsplash.com/photo-1518562180175-34a163b1a9a6?q=80&w=1000&auto=format&fit=crop",
            health: 150,
            attack: 20,
            defense: 18,
            exp_reward: 100,
            gold_reward: 80,
            word_category: "mythology",
            word_prompt: "Угадай мифологическое существо, чтобы победить дракона:",
            difficulty: 5,
            required_level: 6,
        },
    ]
}

pub fn get_enemy(id: &str) -> Option<Enemy> {
    get_all_enemies().into_iter().find(|e| e.id == id)
}
