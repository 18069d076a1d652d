use crate::character::classes::AbilityKind;
use crate::character::player::EffectiveStats;
use crate::character::progression::VictorySpoils;
use crate::puzzle::WordRound;
use crate::world::enemies::Enemy;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleStatus {
    Active,
    Victory,
    Defeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefeatReason {
    /// The player's battle health ran out.
    HealthDepleted,
    /// Too many wrong guesses on one word.
    GallowsComplete,
}

/// Something that happened while resolving a player action.
#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    CorrectGuess {
        letter: char,
    },
    WrongGuess {
        letter: char,
        damage: u32,
    },
    /// A letter uncovered by a hint, an ability, or an item perk.
    LetterRevealed {
        letter: char,
    },
    WordSolved {
        word: String,
        damage: f64,
    },
    /// The enemy survived a solved word; a fresh word was drawn.
    NewWord,
    AbilityUsed {
        ability: AbilityKind,
    },
    EnemyStruck {
        damage: f64,
    },
    PlayerHealed {
        amount: u32,
    },
    WrongGuessLimitRaised {
        by: u32,
    },
    PickpocketArmed,
    Victory {
        bonus_gold: u32,
    },
    Defeat {
        reason: DefeatReason,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error("no battle in progress")]
    NoActiveEncounter,

    #[error("the battle is already over")]
    BattleOver,

    #[error("ability already used in this battle")]
    AbilityAlreadyUsed,

    #[error("ability {} is not known to this class", .0.id())]
    AbilityNotAvailable(AbilityKind),

    #[error("hints need at least {required} intelligence, player has {actual}")]
    InsufficientIntelligence { required: u32, actual: u32 },

    #[error("no letters left to reveal")]
    NoHintAvailable,

    #[error("'{0}' is not on the keyboard")]
    InvalidLetter(char),
}

/// One battle against a single enemy, possibly spanning several words.
///
/// Health here is local to the battle; the persisted profile only changes
/// when the encounter is settled.
#[derive(Debug, Clone)]
pub struct Encounter {
    pub enemy: Enemy,
    pub words: Vec<String>,
    pub round: WordRound,
    pub player_health: u32,
    pub player_max_health: u32,
    /// Fractional: solved-word damage is not rounded.
    pub enemy_health: f64,
    pub enemy_max_health: f64,
    pub stats: EffectiveStats,
    pub abilities: Vec<AbilityKind>,
    pub ability_used: bool,
    pub max_wrong_guesses: u32,
    pub words_solved: u32,
    pub pickpocket_armed: bool,
    pub bonus_gold: u32,
    pub status: BattleStatus,
}

impl Encounter {
    pub fn is_over(&self) -> bool {
        self.status != BattleStatus::Active
    }

    pub fn remaining_attempts(&self) -> u32 {
        self.max_wrong_guesses.saturating_sub(self.round.wrong_guesses)
    }

    pub fn can_use_ability(&self) -> bool {
        !self.is_over() && !self.ability_used && !self.abilities.is_empty()
    }

    /// Rewards owed to the player, once the battle is won.
    pub fn victory_spoils(&self) -> Option<VictorySpoils> {
        if self.status != BattleStatus::Victory {
            return None;
        }
        Some(VictorySpoils {
            experience: self.enemy.exp_reward,
            gold: self.enemy.gold_reward + self.bonus_gold,
            remaining_health: self.player_health,
            words_solved: self.words_solved,
        })
    }
}
