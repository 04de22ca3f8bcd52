use crate::domain::ports::FireDice;
use crate::domain::state::{Bullet, BulletOwner, Invader};
use crate::domain::tuning::invader::InvaderTuning;

/// Rolls the per-tick fire chance and, on success, lets one random alive invader shoot.
///
/// The roll is taken every tick, even when no invader is left to fire.
pub fn invader_fire<D: FireDice + ?Sized>(
    invaders: &[Invader],
    bullets: &mut Vec<Bullet>,
    dice: &mut D,
    tuning: &InvaderTuning,
) -> bool {
    if dice.roll_percent() >= tuning.fire_chance_percent {
        return false;
    }

    let alive: Vec<&Invader> = invaders.iter().filter(|iv| iv.alive).collect();
    if alive.is_empty() {
        return false;
    }

    let Some(shooter) = alive.get(dice.pick(alive.len())) else {
        return false;
    };
    bullets.push(Bullet {
        x: shooter.x,
        y: shooter.y + 1,
        dy: tuning.bullet_dy,
        owner: BulletOwner::Invader,
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::ScriptedDice;

    #[test]
    fn when_roll_misses_the_chance_then_no_bullet_is_spawned() {
        let invaders = vec![Invader { x: 4, y: 1, alive: true }];
        let mut bullets = Vec::new();
        let mut dice = ScriptedDice::new([10], []);

        let fired = invader_fire(&invaders, &mut bullets, &mut dice, &InvaderTuning::default());

        assert!(!fired);
        assert!(bullets.is_empty());
    }

    #[test]
    fn when_roll_hits_then_the_picked_alive_invader_fires_downward() {
        let invaders = vec![
            Invader { x: 4, y: 1, alive: true },
            Invader { x: 7, y: 1, alive: false },
            Invader { x: 10, y: 2, alive: true },
        ];
        let mut bullets = Vec::new();
        // Index 1 among the alive invaders is the one at (10, 2).
        let mut dice = ScriptedDice::new([9], [1]);

        let fired = invader_fire(&invaders, &mut bullets, &mut dice, &InvaderTuning::default());

        assert!(fired);
        assert_eq!(
            bullets,
            vec![Bullet {
                x: 10,
                y: 3,
                dy: 1,
                owner: BulletOwner::Invader,
            }]
        );
        assert_eq!(dice.pick_lens, vec![2]);
    }

    #[test]
    fn when_no_invader_is_alive_then_a_winning_roll_spawns_nothing() {
        let invaders = vec![Invader { x: 4, y: 1, alive: false }];
        let mut bullets = Vec::new();
        let mut dice = ScriptedDice::new([0], []);

        let fired = invader_fire(&invaders, &mut bullets, &mut dice, &InvaderTuning::default());

        assert!(!fired);
        assert!(bullets.is_empty());
        assert!(dice.pick_lens.is_empty());
    }
}
