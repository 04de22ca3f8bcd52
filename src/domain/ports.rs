// Ports for the nondeterministic inputs of the simulation.

/// Source of the random decisions invaders make each tick.
///
/// Production sessions own a seeded RNG behind this trait; tests script the rolls.
pub trait FireDice: Send {
    /// Returns a roll in `0..100`.
    fn roll_percent(&mut self) -> u32;

    /// Returns an index in `0..len`. Callers never pass zero.
    fn pick(&mut self, len: usize) -> usize;
}
