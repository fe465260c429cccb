//! Core type definitions for the arena.
//!
//! Entities serialise to camelCase JSON. Request payloads default every
//! missing field to its zero value so that absent fields are reported by
//! validation instead of failing to decode, and they also accept the
//! capitalised field names older clients send.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Identity Types
// ---------------------------------------------------------------------------

/// Which nickname-keyed collection an entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Client-created combatant with chosen stats.
    Player,
    /// Client-named combatant with rolled stats.
    Enemy,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("Player"),
            Self::Enemy => f.write_str("Enemy"),
        }
    }
}

/// Unique identifier for a battle record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BattleId(pub Uuid);

impl BattleId {
    /// Create a new random battle ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BattleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BattleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// Anything stored in a nickname-keyed roster.
pub trait Combatant: Clone {
    /// The collection this entity lives in.
    const KIND: EntityKind;

    /// Primary key within the roster.
    fn nickname(&self) -> &str;

    /// Replace the primary key. Callers enforce uniqueness.
    fn set_nickname(&mut self, nickname: String);
}

/// A player. Life may drop below zero; nothing clamps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique nickname among players.
    pub nickname: String,
    /// Remaining life.
    pub life: i32,
    /// Damage dealt when the player strikes.
    pub attack: i32,
}

impl Combatant for Player {
    const KIND: EntityKind = EntityKind::Player;

    fn nickname(&self) -> &str {
        &self.nickname
    }

    fn set_nickname(&mut self, nickname: String) {
        self.nickname = nickname;
    }
}

/// An enemy. Stats are rolled by the store at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    /// Unique nickname among enemies.
    pub nickname: String,
    /// Remaining life.
    pub life: i32,
    /// Damage dealt when the enemy strikes.
    pub attack: i32,
}

impl Combatant for Enemy {
    const KIND: EntityKind = EntityKind::Enemy;

    fn nickname(&self) -> &str {
        &self.nickname
    }

    fn set_nickname(&mut self, nickname: String) {
        self.nickname = nickname;
    }
}

/// One entry of the append-only battle log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    /// Unique battle identifier.
    pub id: BattleId,
    /// Enemy nickname at the time of the battle.
    pub enemy_nickname: String,
    /// Player nickname at the time of the battle.
    pub player_nickname: String,
    /// Die value in 1..=6.
    pub dice_throw: u8,
}

/// Which side landed the blow in a resolved battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Striker {
    /// Die in 1..=3: the enemy's attack comes off the player's life.
    Enemy,
    /// Die in 4..=6: the player's attack comes off the enemy's life.
    Player,
}

/// Result of starting a battle, with post-battle snapshots of both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleOutcome {
    /// Identifier of the appended battle record.
    pub id: BattleId,
    /// Die value in 1..=6.
    pub dice_throw: u8,
    /// Player after damage was applied.
    pub player: Player,
    /// Enemy after damage was applied.
    pub enemy: Enemy,
}

impl BattleOutcome {
    /// Which side struck, derived from the die value.
    #[must_use]
    pub fn striker(&self) -> Striker {
        crate::battle::striker_for(self.dice_throw)
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Payload for creating a player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewPlayer {
    /// Requested nickname.
    #[serde(alias = "Nickname")]
    pub nickname: String,
    /// Starting life; zero means missing.
    #[serde(alias = "Life")]
    pub life: i32,
    /// Attack value; zero means missing.
    #[serde(alias = "Attack")]
    pub attack: i32,
}

/// Payload for creating an enemy. Any stats the client sends are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewEnemy {
    /// Requested nickname.
    #[serde(alias = "Nickname")]
    pub nickname: String,
}

/// Payload for renaming a player or enemy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rename {
    /// The new nickname.
    #[serde(alias = "Nickname")]
    pub nickname: String,
}

/// Payload for starting a battle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartBattle {
    /// Enemy nickname.
    #[serde(alias = "Enemy")]
    pub enemy: String,
    /// Player nickname.
    #[serde(alias = "Player")]
    pub player: String,
}
