use std::collections::VecDeque;

use crate::domain::ports::FireDice;

// Replays scripted rolls and picks; once exhausted, rolls never fire and picks return 0.
pub(crate) struct ScriptedDice {
    rolls: VecDeque<u32>,
    picks: VecDeque<usize>,
    // Every `len` passed to `pick`, for assertions on the candidate pool.
    pub(crate) pick_lens: Vec<usize>,
}

impl ScriptedDice {
    pub(crate) fn new(
        rolls: impl IntoIterator<Item = u32>,
        picks: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            picks: picks.into_iter().collect(),
            pick_lens: Vec::new(),
        }
    }

    pub(crate) fn never_fires() -> Self {
        Self::new([], [])
    }
}

impl FireDice for ScriptedDice {
    fn roll_percent(&mut self) -> u32 {
        self.rolls.pop_front().unwrap_or(99)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.pick_lens.push(len);
        self.picks.pop_front().unwrap_or(0)
    }
}
