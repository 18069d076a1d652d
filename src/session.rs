//! Game session: owns the player profile, the active battle and the random
//! source, and writes the profile back to storage after every change.

use chrono::Utc;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::character::classes::{get_character_class, AbilityKind};
use crate::character::player::Player;
use crate::character::progression::{self, BattleReport};
use crate::combat::{BattleError, BattleEvent, Encounter};
use crate::core::constants::{GAME_STORAGE_KEY, PLAYER_STORAGE_KEY};
use crate::items::catalog::get_shop_item;
use crate::items::ledger::{self, EquipOutcome, LedgerError};
use crate::items::types::Item;
use crate::utils::persistence::{load_json, save_json, KeyValueStore, PersistenceError};
use crate::world::enemies::get_enemy;
use crate::world::words::get_word_category;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no character has been created")]
    NoPlayer,

    #[error("unknown enemy: {0}")]
    UnknownEnemy(String),

    #[error("unknown character class: {0}")]
    UnknownClass(String),

    #[error("unknown word category: {0}")]
    UnknownCategory(String),

    #[error("location needs level {required}, player is level {level}")]
    EnemyLocked { required: u32, level: u32 },

    #[error("character name must not be empty")]
    EmptyName,

    #[error("finish or leave the battle first")]
    BattleInProgress,

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct GameFlags {
    initialized: bool,
}

/// Result of one battle action.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleTurn {
    pub events: Vec<BattleEvent>,
    /// Set when this action ended the battle and the profile was updated.
    pub report: Option<BattleReport>,
}

pub struct GameSession<S: KeyValueStore, R: Rng = StdRng> {
    store: S,
    player: Option<Player>,
    initialized: bool,
    encounter: Option<Encounter>,
    /// Whether the current encounter's outcome was already applied.
    settled: bool,
    rng: R,
}

impl<S: KeyValueStore> GameSession<S, StdRng> {
    pub fn load(store: S) -> Result<Self, SessionError> {
        Self::with_rng(store, StdRng::from_entropy())
    }
}

impl<S: KeyValueStore, R: Rng> GameSession<S, R> {
    /// Reads the saved profile and marks the game initialized on first run.
    pub fn with_rng(mut store: S, rng: R) -> Result<Self, SessionError> {
        let flags: GameFlags = load_json(&store, GAME_STORAGE_KEY)?.unwrap_or_default();
        if !flags.initialized {
            info!("First run, initializing game storage");
            save_json(&mut store, GAME_STORAGE_KEY, &GameFlags { initialized: true })?;
        }

        let player: Option<Player> = load_json(&store, PLAYER_STORAGE_KEY)?;
        match &player {
            Some(p) => info!("Loaded {} (level {} {})", p.name, p.level, p.class_id),
            None => debug!("No saved character"),
        }

        Ok(Self {
            store,
            player,
            initialized: true,
            encounter: None,
            settled: false,
            rng,
        })
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn encounter(&self) -> Option<&Encounter> {
        self.encounter.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates a fresh level 1 character, replacing any existing one.
    pub fn create_player(&mut self, name: &str, class_id: &str) -> Result<&Player, SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }
        let class = get_character_class(class_id)
            .ok_or_else(|| SessionError::UnknownClass(class_id.to_string()))?;

        info!("Creating {} the {}", name, class.id);
        self.player = Some(Player::new(name.to_string(), &class));
        self.encounter = None;
        self.save_player()?;
        self.require_player()
    }

    /// Deletes the character and its saved profile.
    pub fn reset_player(&mut self) -> Result<(), SessionError> {
        info!("Resetting character");
        self.player = None;
        self.encounter = None;
        self.save_player()
    }

    // ---- Economy ----

    pub fn buy_item(&mut self, item_id: &str) -> Result<(), SessionError> {
        self.ensure_no_battle()?;
        let item = get_shop_item(item_id)
            .ok_or_else(|| LedgerError::ItemNotFound(item_id.to_string()))?;
        ledger::buy(self.require_player_mut()?, &item)?;
        debug!("Bought {}", item_id);
        self.save_player()
    }

    /// Sells one copy of an owned item and returns the refund.
    pub fn sell_item(&mut self, item_id: &str) -> Result<u32, SessionError> {
        self.ensure_no_battle()?;
        let refund = ledger::sell(self.require_player_mut()?, item_id)?;
        debug!("Sold {} for {}", item_id, refund);
        self.save_player()?;
        Ok(refund)
    }

    /// Equips an owned item, or drinks it if it is a potion.
    pub fn equip_item(&mut self, item_id: &str) -> Result<EquipOutcome, SessionError> {
        self.ensure_no_battle()?;
        let outcome = ledger::equip(self.require_player_mut()?, item_id)?;
        debug!("Equip {}: {:?}", item_id, outcome);
        self.save_player()?;
        Ok(outcome)
    }

    pub fn unequip_item(&mut self, item_id: &str) -> Result<(), SessionError> {
        self.ensure_no_battle()?;
        ledger::unequip(self.require_player_mut()?, item_id)?;
        self.save_player()
    }

    // ---- Battle ----

    /// Starts a battle against `enemy_id`, replacing any battle in progress.
    pub fn start_encounter(&mut self, enemy_id: &str) -> Result<BattleTurn, SessionError> {
        let player = self.player.as_ref().ok_or(SessionError::NoPlayer)?;
        let enemy =
            get_enemy(enemy_id).ok_or_else(|| SessionError::UnknownEnemy(enemy_id.to_string()))?;
        if enemy.is_locked_for(player.level) {
            return Err(SessionError::EnemyLocked {
                required: enemy.required_level,
                level: player.level,
            });
        }
        let category = get_word_category(enemy.word_category)
            .ok_or_else(|| SessionError::UnknownCategory(enemy.word_category.to_string()))?;

        if self.encounter.as_ref().is_some_and(|e| !e.is_over()) {
            warn!("Abandoning unfinished battle");
        }
        let (encounter, events) = Encounter::start(player, &enemy, category.words, &mut self.rng);
        self.encounter = Some(encounter);
        self.settled = false;
        self.finish_turn(events)
    }

    /// Guesses a letter. Lowercase input is accepted.
    pub fn guess_letter(&mut self, letter: char) -> Result<BattleTurn, SessionError> {
        let letter = letter.to_uppercase().next().unwrap_or(letter);
        let encounter = self
            .encounter
            .as_mut()
            .ok_or(BattleError::NoActiveEncounter)?;
        let events = encounter.guess_letter(letter, &mut self.rng)?;
        self.finish_turn(events)
    }

    /// Reveals a letter and counts the hint in the player's stats.
    pub fn request_hint(&mut self) -> Result<BattleTurn, SessionError> {
        let encounter = self
            .encounter
            .as_mut()
            .ok_or(BattleError::NoActiveEncounter)?;
        let events = encounter.request_hint(&mut self.rng)?;
        self.require_player_mut()?.stats.hints_used += 1;
        self.save_player()?;
        self.finish_turn(events)
    }

    pub fn use_ability(&mut self, ability: AbilityKind) -> Result<BattleTurn, SessionError> {
        let encounter = self
            .encounter
            .as_mut()
            .ok_or(BattleError::NoActiveEncounter)?;
        let events = encounter.use_ability(ability, &mut self.rng)?;
        self.finish_turn(events)
    }

    /// Leaves the battle screen. An unfinished battle is dropped with no
    /// reward or penalty.
    pub fn leave_encounter(&mut self) {
        if let Some(encounter) = self.encounter.take() {
            if !encounter.is_over() {
                info!("Left battle against {}", encounter.enemy.id);
            }
        }
        self.settled = false;
    }

    // ---- Queries ----

    pub fn is_letter_guessed(&self, letter: char) -> bool {
        self.encounter
            .as_ref()
            .is_some_and(|e| e.round.is_letter_guessed(letter))
    }

    /// Unknown enemies and a missing character count as locked.
    pub fn is_location_locked(&self, enemy_id: &str) -> bool {
        match (get_enemy(enemy_id), &self.player) {
            (Some(enemy), Some(player)) => enemy.is_locked_for(player.level),
            _ => true,
        }
    }

    pub fn is_item_equipped(&self, item_id: &str) -> bool {
        self.player.as_ref().is_some_and(|p| p.is_equipped(item_id))
    }

    pub fn can_equip_item(&self, item_id: &str) -> bool {
        let Some(player) = &self.player else {
            return false;
        };
        match self.lookup_item(item_id) {
            Some(item) => ledger::can_equip(player, &item),
            None => false,
        }
    }

    pub fn can_afford(&self, item_id: &str) -> bool {
        match (&self.player, get_shop_item(item_id)) {
            (Some(player), Some(item)) => ledger::can_afford(player, &item),
            _ => false,
        }
    }

    fn lookup_item(&self, item_id: &str) -> Option<Item> {
        self.player
            .as_ref()
            .and_then(|p| p.find_item(item_id).cloned())
            .or_else(|| get_shop_item(item_id))
    }

    // ---- Internals ----

    /// The battle works on a snapshot of the profile, so the inventory is
    /// frozen until it ends.
    fn ensure_no_battle(&self) -> Result<(), SessionError> {
        if self.encounter.as_ref().is_some_and(|e| !e.is_over()) {
            return Err(SessionError::BattleInProgress);
        }
        Ok(())
    }

    fn require_player(&self) -> Result<&Player, SessionError> {
        self.player.as_ref().ok_or(SessionError::NoPlayer)
    }

    fn require_player_mut(&mut self) -> Result<&mut Player, SessionError> {
        self.player.as_mut().ok_or(SessionError::NoPlayer)
    }

    fn finish_turn(&mut self, events: Vec<BattleEvent>) -> Result<BattleTurn, SessionError> {
        let report = self.settle()?;
        Ok(BattleTurn { events, report })
    }

    /// Applies the outcome of a finished battle to the profile, once.
    fn settle(&mut self) -> Result<Option<BattleReport>, SessionError> {
        if self.settled {
            return Ok(None);
        }
        let Some(encounter) = self.encounter.as_ref() else {
            return Ok(None);
        };
        if !encounter.is_over() {
            return Ok(None);
        }

        let player = self.player.as_mut().ok_or(SessionError::NoPlayer)?;
        let report = match encounter.victory_spoils() {
            Some(spoils) => progression::apply_victory(player, spoils),
            None => progression::apply_defeat(player, encounter.words_solved),
        };
        if report.level_up {
            info!("{} reached level {}", player.name, player.level);
        }

        self.settled = true;
        self.save_player()?;
        Ok(Some(report))
    }

    /// Writes the profile, or removes it when there is no character.
    fn save_player(&mut self) -> Result<(), SessionError> {
        match self.player.as_mut() {
            Some(player) => {
                player.last_save_time = Utc::now().timestamp();
                save_json(&mut self.store, PLAYER_STORAGE_KEY, player)?;
            }
            None => self.store.remove(PLAYER_STORAGE_KEY)?,
        }
        Ok(())
    }
}
