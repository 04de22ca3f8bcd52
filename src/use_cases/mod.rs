// Use cases layer: application workflows for the game server.

pub mod game;
pub mod ports;
pub mod session;
pub mod types;

pub use game::Game;
pub use ports::FrameSink;
pub use session::{drain_latest, run_session};
pub use types::{QueueState, SessionEnd, SessionFrame, SessionSummary, TickOutcome};
