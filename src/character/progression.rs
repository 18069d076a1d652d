//! Battle settlement: rewards, level-ups, and defeat penalties.

use super::player::Player;
use crate::core::constants::*;

/// What a won encounter hands over to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VictorySpoils {
    pub experience: u64,
    pub gold: u32,
    /// Health left on the player's side of the battle.
    pub remaining_health: u32,
    pub words_solved: u32,
}

/// Summary of a settled encounter for the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleReport {
    pub victory: bool,
    pub exp_gained: u64,
    pub gold_gained: u32,
    pub level_up: bool,
    pub health_lost: u32,
    pub words_solved: u32,
}

/// Applies at most one level-up step. Returns true if the level changed.
///
/// Overshooting the threshold by several levels still grants a single
/// step; the next victory checks again.
pub fn apply_level_up(player: &mut Player) -> bool {
    if player.experience < player.xp_for_next_level() {
        return false;
    }
    player.level += 1;
    player.max_health += LEVEL_UP_MAX_HEALTH;
    player.health = player.max_health;
    player.attack += LEVEL_UP_ATTACK;
    player.defense += LEVEL_UP_DEFENSE;
    player.intelligence += LEVEL_UP_INTELLIGENCE;
    true
}

pub fn apply_victory(player: &mut Player, spoils: VictorySpoils) -> BattleReport {
    player.experience += spoils.experience;
    player.gold += spoils.gold;
    player.health = spoils.remaining_health.min(player.max_health);
    player.stats.battles_won += 1;
    player.stats.words_guessed += spoils.words_solved;

    let level_up = apply_level_up(player);

    BattleReport {
        victory: true,
        exp_gained: spoils.experience,
        gold_gained: spoils.gold,
        level_up,
        health_lost: 0,
        words_solved: spoils.words_solved,
    }
}

/// Applies the flat defeat penalty to the persisted health, never below 1.
/// Damage taken inside the battle does not carry over.
pub fn apply_defeat(player: &mut Player, words_solved: u32) -> BattleReport {
    let before = player.health;
    player.health = before
        .saturating_sub(DEFEAT_HEALTH_PENALTY)
        .max(MIN_HEALTH_AFTER_DEFEAT);
    player.stats.battles_lost += 1;
    player.stats.words_guessed += words_solved;

    BattleReport {
        victory: false,
        exp_gained: 0,
        gold_gained: 0,
        level_up: false,
        health_lost: before.saturating_sub(player.health),
        words_solved,
    }
}
