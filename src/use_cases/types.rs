// Use-case level inputs/outputs for the session loop.

use crate::domain::GameSnapshot;

/// Result of advancing a game by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    GameOver,
}

/// Frames the session loop emits toward the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionFrame {
    Snapshot(GameSnapshot),
    GameOver,
}

/// Whether the intent queue can still deliver input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueState {
    Open,
    // The reader dropped its sender: the connection is gone.
    Closed,
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    GameOver,
    Disconnected,
    SinkClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub end: SessionEnd,
    pub score: u32,
    pub lives: i32,
    pub ticks: u64,
}
