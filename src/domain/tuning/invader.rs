use super::FIELD_WIDTH;

/// Gameplay tuning for the invader formation.
#[derive(Debug, Clone, Copy)]
pub struct InvaderTuning {
    /// Number of formation rows at spawn.
    pub rows: i32,

    /// Column of the leftmost invader at spawn.
    pub start_x: i32,

    /// Horizontal spacing between invaders in a row.
    pub step_x: i32,

    /// Row of the topmost invader at spawn.
    pub start_y: i32,

    /// Exclusive upper limit for spawn columns.
    pub end_x: i32,

    /// The formation moves on every N-th tick.
    pub move_every: u64,

    /// Leftmost column an alive invader may occupy.
    pub left_bound: i32,

    /// Rightmost column an alive invader may occupy.
    pub right_bound: i32,

    /// Chance in percent that one invader fires on a given tick.
    pub fire_chance_percent: u32,

    /// Vertical velocity of invader bullets in cells per tick (positive is down).
    pub bullet_dy: i32,

    /// Score awarded per invader killed.
    pub score_per_kill: u32,
}

impl Default for InvaderTuning {
    fn default() -> Self {
        Self {
            rows: 3,
            start_x: 4,
            step_x: 3,
            start_y: 1,
            end_x: FIELD_WIDTH - 4,
            move_every: 10,
            left_bound: 1,
            right_bound: FIELD_WIDTH - 2,
            fire_chance_percent: 10,
            bullet_dy: 1,
            score_per_kill: 10,
        }
    }
}
