// Per-tick systems. Each one mutates a slice of the session's entities.

pub mod bullets;
pub mod formation;
pub mod invader_fire;
pub mod player;
