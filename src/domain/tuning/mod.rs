// Gameplay tuning. Runtime/server settings (tick rate, queue sizes) live in frameworks::config.

pub mod invader;
pub mod player;

/// Field width in cells.
pub const FIELD_WIDTH: i32 = 40;

/// Field height in cells. Y grows downward from the top row.
pub const FIELD_HEIGHT: i32 = 20;
