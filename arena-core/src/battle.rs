//! Battle resolution: one die-decided exchange between a player and an enemy.
//!
//! A die of 1–3 means the enemy strikes and its attack comes off the
//! player's life; 4–6 means the player strikes the enemy. Life is never
//! clamped at zero, so repeated losses drive it below zero. There is no
//! defeat state: a side at zero or less can still be sent into battle.
//! Subtraction saturates at `i32::MIN` instead of overflowing.

use crate::types::{Enemy, Player, Striker};

/// Highest die value on which the enemy strikes.
pub const ENEMY_STRIKES_UP_TO: u8 = 3;

/// Which side strikes for a given die value.
#[must_use]
pub fn striker_for(dice_throw: u8) -> Striker {
    if dice_throw <= ENEMY_STRIKES_UP_TO {
        Striker::Enemy
    } else {
        Striker::Player
    }
}

/// Apply one exchange to `player` and `enemy` and report who struck.
///
/// Exactly one side's life changes.
pub fn resolve(player: &mut Player, enemy: &mut Enemy, dice_throw: u8) -> Striker {
    let striker = striker_for(dice_throw);
    match striker {
        Striker::Enemy => player.life = player.life.saturating_sub(enemy.attack),
        Striker::Player => enemy.life = enemy.life.saturating_sub(player.attack),
    }
    striker
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> (Player, Enemy) {
        (
            Player {
                nickname: "hero".into(),
                life: 20,
                attack: 5,
            },
            Enemy {
                nickname: "orc".into(),
                life: 8,
                attack: 3,
            },
        )
    }

    #[test]
    fn low_roll_hurts_player() {
        let (mut player, mut enemy) = pair();
        let striker = resolve(&mut player, &mut enemy, 2);
        assert_eq!(striker, Striker::Enemy);
        assert_eq!(player.life, 17);
        assert_eq!(enemy.life, 8);
    }

    #[test]
    fn high_roll_hurts_enemy() {
        let (mut player, mut enemy) = pair();
        let striker = resolve(&mut player, &mut enemy, 5);
        assert_eq!(striker, Striker::Player);
        assert_eq!(player.life, 20);
        assert_eq!(enemy.life, 3);
    }

    #[test]
    fn split_is_three_and_three() {
        let enemy_faces = (1..=6).filter(|d| striker_for(*d) == Striker::Enemy).count();
        assert_eq!(enemy_faces, 3);
        assert_eq!(striker_for(3), Striker::Enemy);
        assert_eq!(striker_for(4), Striker::Player);
    }

    #[test]
    fn life_goes_negative() {
        let (mut player, mut enemy) = pair();
        resolve(&mut player, &mut enemy, 6);
        resolve(&mut player, &mut enemy, 6);
        assert_eq!(enemy.life, -2);
    }

    #[test]
    fn unanswered_losses_bottom_out_without_overflow() {
        let (mut player, mut enemy) = pair();
        player.life = i32::MIN + 1;
        resolve(&mut player, &mut enemy, 1);
        assert_eq!(player.life, i32::MIN);
        resolve(&mut player, &mut enemy, 1);
        assert_eq!(player.life, i32::MIN);
    }
}
