// Character creation
pub const STARTING_GOLD: u32 = 100;
pub const STARTING_LEVEL: u32 = 1;

// Word rounds
pub const ALPHABET: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";
pub const MAX_WRONG_GUESSES: u32 = 6;
pub const HINT_MIN_INTELLIGENCE: u32 = 3;

// Damage exchange
pub const SOLVED_WORD_INT_FACTOR: f64 = 0.5;
pub const DEFENSE_MITIGATION_FACTOR: f64 = 0.5;
pub const MIN_ENEMY_HIT: u32 = 1;

// Class abilities
pub const WARRIOR_STRIKE_MULTIPLIER: f64 = 1.5;
pub const WARRIOR_ENDURANCE_EXTRA_ATTEMPTS: u32 = 2;
pub const MAGE_REVEAL_LETTERS: usize = 3;
pub const MAGE_FIREBALL_INT_MULTIPLIER: f64 = 1.5;
pub const ROGUE_DODGE_HEAL_FRACTION: f64 = 0.3;
pub const ROGUE_PICKPOCKET_CHANCE: f64 = 0.5;
pub const ROGUE_PICKPOCKET_GOLD_DIVISOR: u32 = 2;

// Battle settlement
pub const DEFEAT_HEALTH_PENALTY: u32 = 20;
pub const MIN_HEALTH_AFTER_DEFEAT: u32 = 1;

// Leveling: threshold is level * XP_PER_LEVEL, one step per victory
pub const XP_PER_LEVEL: u64 = 100;
pub const LEVEL_UP_MAX_HEALTH: u32 = 10;
pub const LEVEL_UP_ATTACK: u32 = 2;
pub const LEVEL_UP_DEFENSE: u32 = 2;
pub const LEVEL_UP_INTELLIGENCE: u32 = 1;

// Economy
pub const SELL_PRICE_DIVISOR: u32 = 2;

// Persistence keys and locations
pub const PLAYER_STORAGE_KEY: &str = "player-storage";
pub const GAME_STORAGE_KEY: &str = "game-storage";
pub const DATA_DIR_ENV: &str = "WORDBATTLE_DATA_DIR";
pub const APP_NAME: &str = "wordbattle";
