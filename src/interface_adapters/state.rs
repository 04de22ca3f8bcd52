use crate::domain::tuning::{invader::InvaderTuning, player::PlayerTuning};
use std::time::Duration;

/// Settings shared by every connection's session.
#[derive(Debug, Clone)]
pub struct AppState {
    // Fixed wall-clock cadence of the session loop.
    pub tick_interval: Duration,
    // Capacity of the per-connection intent queue; overflow drops the newest intent.
    pub input_queue_capacity: usize,
    // Gameplay tuning each new session starts from.
    pub player_tuning: PlayerTuning,
    pub invader_tuning: InvaderTuning,
}
