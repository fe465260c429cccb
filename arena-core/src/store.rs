//! In-memory entity store for players, enemies and the battle log.
//!
//! All three collections sit behind one [`parking_lot::Mutex`]. Each public
//! method takes the lock exactly once and runs its checks and mutation inside
//! it, so a check-then-insert can never interleave with another writer.
//!
//! ```
//! # use arena_core::{ArenaStore, NewPlayer};
//! # use arena_core::config::RulesConfig;
//! let store = ArenaStore::new(&RulesConfig::default())?;
//! store.add_player(NewPlayer { nickname: "hero".into(), life: 20, attack: 5 })?;
//! assert_eq!(store.player("hero")?.life, 20);
//! # Ok::<(), arena_core::ArenaError>(())
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::battle;
use crate::config::RulesConfig;
use crate::dice::{self, RandomSource, SeededRandom, ThreadRandom};
use crate::error::{ArenaError, Result};
use crate::types::{
    Battle, BattleId, BattleOutcome, Combatant, Enemy, NewEnemy, NewPlayer, Player,
    Rename, StartBattle,
};
use crate::validation;

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

/// Insertion-ordered collection keyed by nickname.
#[derive(Debug, Clone)]
pub struct Roster<T> {
    entries: Vec<T>,
}

impl<T> Default for Roster<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T: Combatant> Roster<T> {
    /// All entries in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the roster has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, nickname: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|entry| entry.nickname() == nickname)
            .ok_or_else(|| ArenaError::not_found(T::KIND, nickname))
    }

    /// Look up an entry by nickname.
    ///
    /// # Errors
    /// `NotFound` if no entry has that nickname.
    pub fn get(&self, nickname: &str) -> Result<&T> {
        let index = self.position(nickname)?;
        Ok(&self.entries[index])
    }

    /// Mutable lookup by nickname.
    ///
    /// # Errors
    /// `NotFound` if no entry has that nickname.
    pub fn get_mut(&mut self, nickname: &str) -> Result<&mut T> {
        let index = self.position(nickname)?;
        Ok(&mut self.entries[index])
    }

    /// Append `entry` unless its nickname is taken.
    ///
    /// # Errors
    /// `Conflict` on a duplicate nickname.
    pub fn insert(&mut self, entry: T) -> Result<&T> {
        validation::ensure_unique(&self.entries, entry.nickname(), None)?;
        self.entries.push(entry);
        let last = self.entries.len() - 1;
        Ok(&self.entries[last])
    }

    /// Change the nickname of `current` to `req.nickname`.
    ///
    /// # Errors
    /// `Validation` for an empty nickname, `Conflict` if another entry holds
    /// it, `NotFound` if `current` is absent, in that order.
    pub fn rename(&mut self, current: &str, req: Rename) -> Result<&T> {
        validation::check_rename(T::KIND, &req)?;
        validation::ensure_unique(&self.entries, &req.nickname, Some(current))?;
        let entry = self.get_mut(current)?;
        entry.set_nickname(req.nickname);
        Ok(entry)
    }

    /// Remove the entry with `nickname`, keeping the order of the rest.
    ///
    /// # Errors
    /// `NotFound` if no entry has that nickname.
    pub fn remove(&mut self, nickname: &str) -> Result<T> {
        let index = self.position(nickname)?;
        Ok(self.entries.remove(index))
    }
}

// ---------------------------------------------------------------------------
// ArenaStore
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct ArenaState {
    players: Roster<Player>,
    enemies: Roster<Enemy>,
    battles: Vec<Battle>,
}

/// Owner of every player, enemy and battle record.
///
/// Cheap to share behind an [`Arc`]; all methods take `&self`.
pub struct ArenaStore {
    rules: RulesConfig,
    random: Arc<dyn RandomSource>,
    state: Mutex<ArenaState>,
}

impl fmt::Debug for ArenaStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ArenaStore")
            .field("rules", &self.rules)
            .field("random", &self.random)
            .field("players", &state.players.len())
            .field("enemies", &state.enemies.len())
            .field("battles", &state.battles.len())
            .finish()
    }
}

impl Default for ArenaStore {
    fn default() -> Self {
        Self::build(RulesConfig::default(), Arc::new(ThreadRandom))
    }
}

impl ArenaStore {
    /// Create an empty store. Uses a [`SeededRandom`] when `rules.seed` is
    /// set and thread-local entropy otherwise.
    ///
    /// # Errors
    /// `Config` if a limit in `rules` is below 1.
    pub fn new(rules: &RulesConfig) -> Result<Self> {
        let random: Arc<dyn RandomSource> = match rules.seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(ThreadRandom),
        };
        Self::with_random(rules, random)
    }

    /// Create an empty store drawing all randomness from `random`.
    ///
    /// # Errors
    /// `Config` if a limit in `rules` is below 1.
    pub fn with_random(rules: &RulesConfig, random: Arc<dyn RandomSource>) -> Result<Self> {
        rules.validate()?;
        Ok(Self::build(rules.clone(), random))
    }

    fn build(rules: RulesConfig, random: Arc<dyn RandomSource>) -> Self {
        Self {
            rules,
            random,
            state: Mutex::new(ArenaState::default()),
        }
    }

    // -- players ------------------------------------------------------------

    /// Validate and append a new player.
    ///
    /// # Errors
    /// `Validation`, `Range` or `Conflict`; nothing is stored on error.
    pub fn add_player(&self, req: NewPlayer) -> Result<Player> {
        validation::check_new_player(&req, &self.rules)?;
        let player = Player {
            nickname: req.nickname,
            life: req.life,
            attack: req.attack,
        };
        let mut state = self.state.lock();
        let stored = state.players.insert(player)?.clone();
        debug!(nickname = %stored.nickname, life = stored.life, attack = stored.attack, "player added");
        Ok(stored)
    }

    /// Every player in insertion order.
    #[must_use]
    pub fn players(&self) -> Vec<Player> {
        self.state.lock().players.as_slice().to_vec()
    }

    /// Look up a player by nickname.
    ///
    /// # Errors
    /// `NotFound` if absent.
    pub fn player(&self, nickname: &str) -> Result<Player> {
        self.state.lock().players.get(nickname).cloned()
    }

    /// Rename a player. Life and attack are untouched.
    ///
    /// # Errors
    /// `Validation`, `Conflict` or `NotFound`.
    pub fn rename_player(&self, nickname: &str, req: Rename) -> Result<Player> {
        let renamed = self.state.lock().players.rename(nickname, req)?.clone();
        debug!(from = nickname, to = %renamed.nickname, "player renamed");
        Ok(renamed)
    }

    /// Delete a player, returning the removed entry.
    ///
    /// # Errors
    /// `NotFound` if absent; the roster is unchanged.
    pub fn remove_player(&self, nickname: &str) -> Result<Player> {
        let removed = self.state.lock().players.remove(nickname)?;
        debug!(nickname, "player removed");
        Ok(removed)
    }

    // -- enemies ------------------------------------------------------------

    /// Validate and append a new enemy with rolled life and attack.
    ///
    /// Life is rolled before attack. No roll happens if validation fails.
    ///
    /// # Errors
    /// `Validation` or `Conflict`; nothing is stored on error.
    pub fn add_enemy(&self, req: NewEnemy) -> Result<Enemy> {
        validation::check_new_enemy(&req)?;
        let mut state = self.state.lock();
        validation::ensure_unique(state.enemies.as_slice(), &req.nickname, None)?;
        let max = self.rules.max_enemy_stat;
        let enemy = Enemy {
            nickname: req.nickname,
            life: self.random.roll(1, max),
            attack: self.random.roll(1, max),
        };
        let stored = state.enemies.insert(enemy)?.clone();
        debug!(nickname = %stored.nickname, life = stored.life, attack = stored.attack, "enemy added");
        Ok(stored)
    }

    /// Every enemy in insertion order.
    #[must_use]
    pub fn enemies(&self) -> Vec<Enemy> {
        self.state.lock().enemies.as_slice().to_vec()
    }

    /// Look up an enemy by nickname.
    ///
    /// # Errors
    /// `NotFound` if absent.
    pub fn enemy(&self, nickname: &str) -> Result<Enemy> {
        self.state.lock().enemies.get(nickname).cloned()
    }

    /// Rename an enemy. Life and attack are untouched.
    ///
    /// # Errors
    /// `Validation`, `Conflict` or `NotFound`.
    pub fn rename_enemy(&self, nickname: &str, req: Rename) -> Result<Enemy> {
        let renamed = self.state.lock().enemies.rename(nickname, req)?.clone();
        debug!(from = nickname, to = %renamed.nickname, "enemy renamed");
        Ok(renamed)
    }

    /// Delete an enemy, returning the removed entry.
    ///
    /// # Errors
    /// `NotFound` if absent; the roster is unchanged.
    pub fn remove_enemy(&self, nickname: &str) -> Result<Enemy> {
        let removed = self.state.lock().enemies.remove(nickname)?;
        debug!(nickname, "enemy removed");
        Ok(removed)
    }

    // -- battles ------------------------------------------------------------

    /// Resolve one exchange between the named enemy and player and log it.
    ///
    /// The enemy is looked up before the player. The die is only thrown once
    /// both exist.
    ///
    /// # Errors
    /// `Validation` for an empty nickname, `NotFound` for a missing side.
    pub fn start_battle(&self, req: StartBattle) -> Result<BattleOutcome> {
        validation::check_battle(&req)?;
        let mut guard = self.state.lock();
        let state = &mut *guard;

        let enemy = state.enemies.get_mut(&req.enemy)?;
        let player = state.players.get_mut(&req.player)?;

        let dice_throw = dice::throw_die(self.random.as_ref());
        let striker = battle::resolve(player, enemy, dice_throw);
        let outcome = BattleOutcome {
            id: BattleId::new(),
            dice_throw,
            player: player.clone(),
            enemy: enemy.clone(),
        };

        state.battles.push(Battle {
            id: outcome.id,
            enemy_nickname: req.enemy,
            player_nickname: req.player,
            dice_throw,
        });

        info!(
            id = %outcome.id,
            dice_throw,
            ?striker,
            player = %outcome.player.nickname,
            player_life = outcome.player.life,
            enemy = %outcome.enemy.nickname,
            enemy_life = outcome.enemy.life,
            "battle resolved"
        );
        Ok(outcome)
    }

    /// The battle log in the order battles were fought.
    #[must_use]
    pub fn battles(&self) -> Vec<Battle> {
        self.state.lock().battles.clone()
    }

}
