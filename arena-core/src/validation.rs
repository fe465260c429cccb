//! Validation rules for creation, rename and battle requests.
//!
//! Zero is the sentinel for "missing" on numeric fields, so a zero life or
//! attack is a [`ArenaError::Validation`] and never a [`ArenaError::Range`].
//! Checks run in a fixed order and stop at the first failure.

use crate::config::RulesConfig;
use crate::error::{ArenaError, Result};
use crate::types::{Combatant, EntityKind, NewEnemy, NewPlayer, Rename, StartBattle};

/// Check a player creation request against the rule limits.
///
/// Order: required fields, attack range, life range. Nickname uniqueness is
/// checked separately with [`ensure_unique`].
///
/// # Errors
/// `Validation` for empty/zero fields, `Range` for out-of-bounds values.
pub fn check_new_player(req: &NewPlayer, rules: &RulesConfig) -> Result<()> {
    if req.nickname.is_empty() || req.life == 0 || req.attack == 0 {
        return Err(ArenaError::Validation {
            kind: EntityKind::Player,
            fields: "nickname, life and attack",
        });
    }
    check_range(EntityKind::Player, "attack", req.attack, rules.max_player_attack)?;
    check_range(EntityKind::Player, "life", req.life, rules.max_player_life)
}

/// Check an enemy creation request.
///
/// # Errors
/// `Validation` if the nickname is empty.
pub fn check_new_enemy(req: &NewEnemy) -> Result<()> {
    require_nickname(EntityKind::Enemy, &req.nickname)
}

/// Check a rename request for either collection.
///
/// # Errors
/// `Validation` if the new nickname is empty.
pub fn check_rename(kind: EntityKind, req: &Rename) -> Result<()> {
    require_nickname(kind, &req.nickname)
}

/// Check that a battle request names both sides, enemy first.
///
/// # Errors
/// `Validation` for the first empty nickname.
pub fn check_battle(req: &StartBattle) -> Result<()> {
    require_nickname(EntityKind::Enemy, &req.enemy)?;
    require_nickname(EntityKind::Player, &req.player)
}

/// Fail if `nickname` is already used in `roster`.
///
/// `except` names an entry that may hold the nickname without conflict,
/// which lets an entity be renamed to its current nickname.
///
/// # Errors
/// `Conflict` if a different entry already uses `nickname`.
pub fn ensure_unique<T: Combatant>(roster: &[T], nickname: &str, except: Option<&str>) -> Result<()> {
    let taken = roster
        .iter()
        .any(|entry| entry.nickname() == nickname && Some(entry.nickname()) != except);
    if taken {
        return Err(ArenaError::conflict(T::KIND, nickname));
    }
    Ok(())
}

/// Fail unless `1 <= value <= max`.
///
/// # Errors
/// `Range` naming the field and bounds.
pub fn check_range(kind: EntityKind, field: &'static str, value: i32, max: i32) -> Result<()> {
    if (1..=max).contains(&value) {
        Ok(())
    } else {
        Err(ArenaError::Range {
            kind,
            field,
            min: 1,
            max,
        })
    }
}

fn require_nickname(kind: EntityKind, nickname: &str) -> Result<()> {
    if nickname.is_empty() {
        return Err(ArenaError::Validation {
            kind,
            fields: "nickname",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn player(nickname: &str, life: i32, attack: i32) -> NewPlayer {
        NewPlayer {
            nickname: nickname.into(),
            life,
            attack,
        }
    }

    #[test]
    fn zero_is_missing_not_out_of_range() {
        let rules = RulesConfig::default();
        for req in [player("", 10, 5), player("hero", 0, 5), player("hero", 10, 0)] {
            let err = check_new_player(&req, &rules).expect_err("missing field");
            assert!(matches!(err, ArenaError::Validation { .. }), "{req:?} gave {err:?}");
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let rules = RulesConfig::default();
        assert!(check_new_player(&player("hero", 1, 1), &rules).is_ok());
        assert!(check_new_player(&player("hero", 100, 10), &rules).is_ok());

        let err = check_new_player(&player("hero", 50, 11), &rules).expect_err("attack");
        assert!(matches!(err, ArenaError::Range { field: "attack", .. }));
        let err = check_new_player(&player("hero", 101, 5), &rules).expect_err("life");
        assert!(matches!(err, ArenaError::Range { field: "life", .. }));
        let err = check_new_player(&player("hero", -4, 5), &rules).expect_err("negative");
        assert!(matches!(err, ArenaError::Range { field: "life", .. }));
    }

    #[test]
    fn attack_checked_before_life() {
        let err = check_new_player(&player("hero", 500, 50), &RulesConfig::default()).expect_err("both");
        assert!(matches!(err, ArenaError::Range { field: "attack", .. }));
    }

    #[test]
    fn battle_requires_enemy_first() {
        let err = check_battle(&StartBattle::default()).expect_err("empty");
        assert!(matches!(err, ArenaError::Validation { kind: EntityKind::Enemy, .. }));

        let req = StartBattle {
            enemy: "orc".into(),
            player: String::new(),
        };
        let err = check_battle(&req).expect_err("no player");
        assert!(matches!(err, ArenaError::Validation { kind: EntityKind::Player, .. }));
    }

    #[test]
    fn unique_allows_self_rename() {
        let roster = vec![
            Player {
                nickname: "hero".into(),
                life: 10,
                attack: 2,
            },
            Player {
                nickname: "rogue".into(),
                life: 10,
                attack: 2,
            },
        ];
        assert!(ensure_unique(&roster, "mage", None).is_ok());
        assert!(ensure_unique(&roster, "hero", Some("hero")).is_ok());
        let err = ensure_unique(&roster, "rogue", Some("hero")).expect_err("taken");
        assert!(matches!(err, ArenaError::Conflict { kind: EntityKind::Player, .. }));
    }
}
