// Domain-level simulation entities and input/snapshot types.

/// Directional and fire intent decoded from one client message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intent {
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub lives: i32,
    // Ticks until the next shot is allowed.
    pub cooldown: u32,
}

/// Dead invaders stay in storage with `alive == false` and are skipped by every system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invader {
    pub x: i32,
    pub y: i32,
    pub alive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Invader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    pub dy: i32,
    pub owner: BulletOwner,
}

/// Visible state after a tick: alive invaders and live bullets only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: i32,
    pub height: i32,
    pub player_x: i32,
    pub player_y: i32,
    pub invaders: Vec<(i32, i32)>,
    pub bullets: Vec<(i32, i32)>,
    pub score: u32,
    pub lives: i32,
}
