use crate::domain::state::{Bullet, BulletOwner, Invader, Player};

#[derive(Debug, Clone, Copy)]
pub struct BulletConfig {
    pub field_height: i32,
    pub score_per_kill: u32,
}

/// Outcome of one bullet pass, used for scoring and logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulletReport {
    pub kills: u32,
    pub score: u32,
    pub player_hits: u32,
}

/// Advances every bullet one step, then resolves collisions at the new cell.
///
/// Bullets that leave the field are dropped before any hit test. A player bullet kills the
/// first alive invader in storage order at its cell; an invader bullet costs the player a life
/// on an exact cell match. Bullets that hit something are consumed.
pub fn tick_bullets(
    bullets: &mut Vec<Bullet>,
    invaders: &mut [Invader],
    player: &mut Player,
    cfg: BulletConfig,
) -> BulletReport {
    let mut report = BulletReport::default();

    bullets.retain_mut(|b| {
        b.y += b.dy;
        if b.y < 0 || b.y >= cfg.field_height {
            return false;
        }

        let hit = match b.owner {
            BulletOwner::Player => {
                match invaders
                    .iter_mut()
                    .find(|iv| iv.alive && iv.x == b.x && iv.y == b.y)
                {
                    Some(iv) => {
                        iv.alive = false;
                        report.kills += 1;
                        report.score += cfg.score_per_kill;
                        true
                    }
                    None => false,
                }
            }
            BulletOwner::Invader => {
                if b.x == player.x && b.y == player.y {
                    player.lives -= 1;
                    report.player_hits += 1;
                    true
                } else {
                    false
                }
            }
        };

        !hit
    });

    report
}
