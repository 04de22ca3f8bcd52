// Per-connection session loop: fixed-rate ticks fed by a latest-wins intent queue.

use super::game::Game;
use super::ports::FrameSink;
use super::types::{QueueState, SessionEnd, SessionFrame, SessionSummary, TickOutcome};
use crate::domain::{FireDice, Intent};
use std::time::Duration;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, warn};

/// Drains every pending intent, keeping only the most recent one in `current`.
///
/// An empty queue leaves `current` untouched so the previous tick's input carries over.
pub fn drain_latest(intents: &mut mpsc::Receiver<Intent>, current: &mut Intent) -> QueueState {
    loop {
        match intents.try_recv() {
            Ok(intent) => *current = intent,
            Err(TryRecvError::Empty) => return QueueState::Open,
            Err(TryRecvError::Disconnected) => return QueueState::Closed,
        }
    }
}

/// Runs one game until game over, sink failure, or the intent queue closing.
///
/// The first tick fires one `tick_interval` after start. Every tick emits a snapshot; the
/// game-over tick additionally emits a terminal frame.
pub async fn run_session<S, D>(
    mut game: Game,
    mut intents: mpsc::Receiver<Intent>,
    sink: &mut S,
    dice: &mut D,
    tick_interval: Duration,
) -> SessionSummary
where
    S: FrameSink,
    D: FireDice,
{
    let mut interval = tokio::time::interval_at(Instant::now() + tick_interval, tick_interval);
    // Late ticks are skipped rather than replayed in a burst.
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut current = Intent::default();

    let end = loop {
        interval.tick().await;

        if drain_latest(&mut intents, &mut current) == QueueState::Closed {
            debug!(tick = game.tick, "intent queue closed");
            break SessionEnd::Disconnected;
        }

        let outcome = game.advance(&current, dice);

        if let Err(e) = sink.send_frame(SessionFrame::Snapshot(game.snapshot())).await {
            warn!(error = ?e, tick = game.tick, "failed to send snapshot");
            break SessionEnd::SinkClosed;
        }

        if outcome == TickOutcome::GameOver {
            if let Err(e) = sink.send_frame(SessionFrame::GameOver).await {
                debug!(error = ?e, "failed to send game over");
            }
            break SessionEnd::GameOver;
        }
    };

    SessionSummary {
        end,
        score: game.score,
        lives: game.player.lives,
        ticks: game.tick,
    }
}
