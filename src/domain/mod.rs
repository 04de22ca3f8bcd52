// Domain layer: core simulation types and rules.

pub mod ports;
pub mod state;
pub mod systems;
pub mod tuning;

pub use ports::FireDice;
pub use state::{Bullet, BulletOwner, GameSnapshot, Intent, Invader, Player};

#[cfg(test)]
pub(crate) mod test_support;
