//! Integration Tests — roster and battle flows through the public store API.

use std::sync::Arc;
use std::thread;

use arena_core::config::RulesConfig;
use arena_core::dice::ScriptedRandom;
use arena_core::{
    ArenaError, ArenaStore, EntityKind, NewEnemy, NewPlayer, Rename, StartBattle, Striker,
};

fn hero() -> NewPlayer {
    NewPlayer {
        nickname: "hero".into(),
        life: 20,
        attack: 5,
    }
}

fn orc() -> NewEnemy {
    NewEnemy {
        nickname: "orc".into(),
    }
}

fn fight() -> StartBattle {
    StartBattle {
        enemy: "orc".into(),
        player: "hero".into(),
    }
}

/// Store whose enemy rolls life 8, attack 3, then throws `die`.
fn arena_with_die(die: i32) -> ArenaStore {
    let source = ScriptedRandom::new([8, 3, die]);
    let store = ArenaStore::with_random(&RulesConfig::default(), Arc::new(source)).expect("store");
    store.add_player(hero()).expect("hero");
    let enemy = store.add_enemy(orc()).expect("orc");
    assert_eq!((enemy.life, enemy.attack), (8, 3));
    store
}

// ---------------------------------------------------------------------------
// Battle resolution with a fixed die
// ---------------------------------------------------------------------------

#[test]
fn die_two_enemy_strikes_player() {
    let store = arena_with_die(2);
    let outcome = store.start_battle(fight()).expect("battle");

    assert_eq!(outcome.dice_throw, 2);
    assert_eq!(outcome.striker(), Striker::Enemy);
    assert_eq!(outcome.player.life, 17);
    assert_eq!(outcome.enemy.life, 8);

    // Mutation is permanent.
    assert_eq!(store.player("hero").expect("hero").life, 17);
    assert_eq!(store.enemy("orc").expect("orc").life, 8);
}

#[test]
fn die_five_player_strikes_enemy() {
    let store = arena_with_die(5);
    let outcome = store.start_battle(fight()).expect("battle");

    assert_eq!(outcome.dice_throw, 5);
    assert_eq!(outcome.striker(), Striker::Player);
    assert_eq!(outcome.player.life, 20);
    assert_eq!(outcome.enemy.life, 3);
    assert_eq!(store.enemy("orc").expect("orc").life, 3);
}

#[test]
fn repeated_battles_drive_life_negative() {
    let source = Arc::new(ScriptedRandom::new([8, 3]));
    let store = ArenaStore::with_random(&RulesConfig::default(), source.clone()).expect("store");
    store.add_player(hero()).expect("hero");
    store.add_enemy(orc()).expect("orc");

    source.push([6, 6, 6]);
    for _ in 0..3 {
        store.start_battle(fight()).expect("battle");
    }
    assert_eq!(store.enemy("orc").expect("orc").life, 8 - 15);
    assert_eq!(store.battles().len(), 3);
}

#[test]
fn missing_sides_report_not_found() {
    let store = ArenaStore::default();
    let err = store.start_battle(fight()).expect_err("nothing exists");
    assert!(matches!(err, ArenaError::NotFound { kind: EntityKind::Enemy, .. }));

    store.add_enemy(orc()).expect("orc");
    let err = store.start_battle(fight()).expect_err("player missing");
    assert!(matches!(err, ArenaError::NotFound { kind: EntityKind::Player, .. }));
}

// ---------------------------------------------------------------------------
// Roster lifecycle
// ---------------------------------------------------------------------------

#[test]
fn player_lifecycle() {
    let store = ArenaStore::default();
    store.add_player(hero()).expect("add");
    assert_eq!(store.player("hero").expect("get").attack, 5);

    store
        .rename_player("hero", Rename { nickname: "champion".into() })
        .expect("rename");
    assert!(store.player("hero").is_err());

    let removed = store.remove_player("champion").expect("remove");
    assert_eq!(removed.life, 20);
    assert!(store.players().is_empty());
}

#[test]
fn battle_log_is_append_only_and_ordered() {
    let source = Arc::new(ScriptedRandom::new([5, 5]));
    let store = ArenaStore::with_random(&RulesConfig::default(), source.clone()).expect("store");
    store.add_player(hero()).expect("hero");
    store.add_enemy(orc()).expect("orc");

    source.push([1, 4, 3]);
    let ids: Vec<_> = (0..3)
        .map(|_| store.start_battle(fight()).expect("battle").id)
        .collect();

    let log = store.battles();
    let logged: Vec<_> = log.iter().map(|b| b.id).collect();
    assert_eq!(logged, ids);
    let dice: Vec<u8> = log.iter().map(|b| b.dice_throw).collect();
    assert_eq!(dice, [1, 4, 3]);

    // Deleting a participant does not touch history.
    store.remove_enemy("orc").expect("remove");
    assert_eq!(store.battles().len(), 3);
}

// ---------------------------------------------------------------------------
// Concurrency: check-then-insert is atomic
// ---------------------------------------------------------------------------

#[test]
fn concurrent_duplicate_creates_admit_exactly_one() {
    let store = Arc::new(ArenaStore::default());
    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.add_player(hero()).is_ok())
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().expect("thread"))
        .filter(|ok| *ok)
        .count();
    assert_eq!(successes, 1);
    assert_eq!(store.players().len(), 1);
}
