use super::{FIELD_HEIGHT, FIELD_WIDTH};

/// Gameplay tuning for the player's cannon.
#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    /// Lives at session start; the session ends when they run out.
    pub start_lives: i32,

    /// Spawn column.
    pub start_x: i32,

    /// Row the cannon is pinned to.
    pub row: i32,

    /// Ticks between shots.
    pub shot_cooldown: u32,

    /// Vertical velocity of player bullets in cells per tick (negative is up).
    pub bullet_dy: i32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            start_lives: 3,
            start_x: FIELD_WIDTH / 2,
            row: FIELD_HEIGHT - 2,
            shot_cooldown: 6,
            bullet_dy: -1,
        }
    }
}
