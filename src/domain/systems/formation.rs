use crate::domain::state::Invader;
use crate::domain::tuning::invader::InvaderTuning;

/// What the formation did on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormationStep {
    /// Not a movement tick.
    Hold,
    /// Every alive invader moved one column in the current direction.
    Shift,
    /// The formation hit a bound: it dropped one row and reversed.
    Descend,
}

/// Lays out the spawn grid row by row, left to right, all alive.
pub fn spawn_formation(tuning: &InvaderTuning) -> Vec<Invader> {
    let step = tuning.step_x.max(1) as usize;
    let mut invaders = Vec::new();
    for y in tuning.start_y..tuning.start_y + tuning.rows {
        for x in (tuning.start_x..tuning.end_x).step_by(step) {
            invaders.push(Invader { x, y, alive: true });
        }
    }
    invaders
}

/// Moves the alive formation as one rigid body on every `move_every`-th tick.
pub fn step_formation(
    invaders: &mut [Invader],
    dir: &mut i32,
    tick: u64,
    tuning: &InvaderTuning,
) -> FormationStep {
    if tuning.move_every == 0 || tick % tuning.move_every != 0 {
        return FormationStep::Hold;
    }

    let at_edge = invaders.iter().filter(|iv| iv.alive).any(|iv| {
        let next_x = iv.x + *dir;
        next_x < tuning.left_bound || next_x > tuning.right_bound
    });

    if at_edge {
        for iv in invaders.iter_mut().filter(|iv| iv.alive) {
            iv.y += 1;
        }
        *dir = -*dir;
        FormationStep::Descend
    } else {
        for iv in invaders.iter_mut().filter(|iv| iv.alive) {
            iv.x += *dir;
        }
        FormationStep::Shift
    }
}
