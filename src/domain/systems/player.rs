use crate::domain::state::{Bullet, BulletOwner, Intent, Player};
use crate::domain::tuning::FIELD_WIDTH;
use crate::domain::tuning::player::PlayerTuning;

pub fn spawn_player(tuning: &PlayerTuning) -> Player {
    Player {
        x: tuning.start_x,
        y: tuning.row,
        lives: tuning.start_lives,
        cooldown: 0,
    }
}

/// Applies one tick of intent: movement, firing, then cooldown decay.
///
/// Returns true when a bullet was fired this tick.
pub fn apply_intent(
    player: &mut Player,
    intent: &Intent,
    bullets: &mut Vec<Bullet>,
    tuning: &PlayerTuning,
) -> bool {
    // Independent checks: left + right together cancel out.
    if intent.left && player.x > 0 {
        player.x -= 1;
    }
    if intent.right && player.x < FIELD_WIDTH - 1 {
        player.x += 1;
    }

    let fired = intent.shoot && player.cooldown == 0;
    if fired {
        bullets.push(Bullet {
            x: player.x,
            y: player.y - 1,
            dy: tuning.bullet_dy,
            owner: BulletOwner::Player,
        });
        player.cooldown = tuning.shot_cooldown;
    }

    // Decay runs after the fire check, including on the tick that fired.
    player.cooldown = player.cooldown.saturating_sub(1);
    fired
}
