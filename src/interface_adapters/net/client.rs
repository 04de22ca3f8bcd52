use crate::domain::Intent;
use crate::interface_adapters::net::sink::WsFrameSink;
use crate::interface_adapters::protocol::decode_intent;
use crate::interface_adapters::state::AppState;
use crate::interface_adapters::utils::rng::{RngDice, rand_id};
use crate::use_cases::{Game, run_session};

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures::{Stream, StreamExt};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{Instrument, debug, info, info_span};

const LOG_THROTTLE: Duration = Duration::from_secs(2);

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    // Connection id for correlating the reader and session logs.
    let conn_id = rand_id();
    let span = info_span!("conn", conn_id);
    run_connection(socket, state).instrument(span).await;
}

async fn run_connection(socket: WebSocket, state: Arc<AppState>) {
    let (ws_tx, ws_rx) = socket.split();

    // The only hand-off between the reader and the session loop.
    let (intent_tx, intent_rx) = mpsc::channel::<Intent>(state.input_queue_capacity);
    let reader = tokio::spawn(read_intents(ws_rx, intent_tx).in_current_span());

    let mut sink = WsFrameSink::new(ws_tx);
    let mut dice = RngDice::new(StdRng::from_entropy());

    info!("session started");
    let summary = run_session(
        Game::with_tuning(state.player_tuning, state.invader_tuning),
        intent_rx,
        &mut sink,
        &mut dice,
        state.tick_interval,
    )
    .await;

    // Stop reading even if the client keeps the socket open after game over.
    reader.abort();
    if let Err(err) = sink.close().await {
        debug!(error = %err, "socket close error");
    }

    info!(
        end = ?summary.end,
        score = summary.score,
        lives = summary.lives,
        ticks = summary.ticks,
        msgs_out = sink.msgs_out,
        bytes_out = sink.bytes_out,
        "session ended"
    );
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ReaderStats {
    pub accepted: u64,
    pub dropped_full: u64,
    pub invalid: u64,
}

fn should_log(last: &mut Option<Instant>) -> bool {
    if last.is_some_and(|at| at.elapsed() < LOG_THROTTLE) {
        return false;
    }
    *last = Some(Instant::now());
    true
}

/// Decodes inbound messages into the intent queue until the connection closes.
///
/// Never waits for queue space: a full queue drops the newest intent. Returning drops
/// `intent_tx`, which is how the session loop learns the connection is gone.
pub(crate) async fn read_intents<S>(mut stream: S, intent_tx: mpsc::Sender<Intent>) -> ReaderStats
where
    S: Stream<Item = Result<Message, axum::Error>> + Unpin,
{
    let mut stats = ReaderStats::default();
    let mut last_full_log = None;
    let mut last_invalid_log = None;

    while let Some(incoming) = stream.next().await {
        let msg = match incoming {
            Ok(msg) => msg,
            Err(e) => {
                debug!(error = %e, "websocket recv error");
                break;
            }
        };

        let intent = match &msg {
            Message::Text(text) => decode_intent(text.as_str().as_bytes()),
            Message::Binary(bytes) => decode_intent(bytes),
            Message::Ping(_) | Message::Pong(_) => continue,
            Message::Close(_) => break,
        };

        let Some(intent) = intent else {
            stats.invalid += 1;
            if should_log(&mut last_invalid_log) {
                debug!(invalid = stats.invalid, "ignoring malformed intent");
            }
            continue;
        };

        match intent_tx.try_send(intent) {
            Ok(()) => stats.accepted += 1,
            Err(TrySendError::Full(_)) => {
                stats.dropped_full += 1;
                if should_log(&mut last_full_log) {
                    debug!(dropped = stats.dropped_full, "intent queue full; dropping input");
                }
            }
            // The session loop is gone; nothing left to feed.
            Err(TrySendError::Closed(_)) => break,
        }
    }

    debug!(
        accepted = stats.accepted,
        dropped_full = stats.dropped_full,
        invalid = stats.invalid,
        "reader finished"
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::ws::CloseFrame;
    use futures::stream;

    fn text(payload: &str) -> Result<Message, axum::Error> {
        Ok(Message::Text(payload.to_owned().into()))
    }

    fn drain(rx: &mut mpsc::Receiver<Intent>) -> Vec<Intent> {
        let mut out = Vec::new();
        while let Ok(intent) = rx.try_recv() {
            out.push(intent);
        }
        out
    }

    #[tokio::test]
    async fn when_valid_and_malformed_messages_arrive_then_only_valid_ones_are_queued() {
        let (tx, mut rx) = mpsc::channel(16);
        let messages = stream::iter(vec![
            text(r#"{"left":true}"#),
            text("garbage"),
            Ok(Message::Ping(Vec::new().into())),
            Ok(Message::Binary(br#"{"shoot":true}"#.to_vec().into())),
        ]);

        let stats = read_intents(messages, tx).await;

        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.invalid, 1);
        assert_eq!(
            drain(&mut rx),
            vec![
                Intent {
                    left: true,
                    ..Intent::default()
                },
                Intent {
                    shoot: true,
                    ..Intent::default()
                },
            ]
        );
    }

    #[tokio::test]
    async fn when_queue_is_full_then_newest_intents_are_dropped_without_blocking() {
        let (tx, mut rx) = mpsc::channel(2);
        let messages = stream::iter(vec![
            text(r#"{"left":true}"#),
            text(r#"{"right":true}"#),
            text(r#"{"shoot":true}"#),
            text(r#"{"shoot":true,"left":true}"#),
        ]);

        let stats = read_intents(messages, tx).await;

        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.dropped_full, 2);
        let queued = drain(&mut rx);
        assert_eq!(queued.len(), 2);
        assert!(queued[0].left);
        assert!(queued[1].right);
    }

    #[tokio::test]
    async fn when_reader_finishes_then_the_queue_reports_disconnected() {
        let (tx, mut rx) = mpsc::channel(16);
        let messages = stream::iter(vec![text(r#"{"left":true}"#)]);

        read_intents(messages, tx).await;

        assert!(rx.recv().await.is_some());
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn when_close_frame_arrives_then_later_messages_are_not_read() {
        let (tx, mut rx) = mpsc::channel(16);
        let messages = stream::iter(vec![
            Ok(Message::Close(Some(CloseFrame {
                code: 1000,
                reason: "bye".into(),
            }))),
            text(r#"{"left":true}"#),
        ]);

        let stats = read_intents(messages, tx).await;

        assert_eq!(stats, ReaderStats::default());
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn when_recv_fails_then_reader_stops() {
        let (tx, mut rx) = mpsc::channel(16);
        let messages = stream::iter(vec![
            Err(axum::Error::new(std::io::Error::other("connection reset"))),
            text(r#"{"left":true}"#),
        ]);

        let stats = read_intents(messages, tx).await;

        assert_eq!(stats.accepted, 0);
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn when_session_loop_is_gone_then_reader_stops() {
        let (tx, rx) = mpsc::channel(16);
        drop(rx);
        let messages = stream::iter(vec![text(r#"{"left":true}"#), text(r#"{"right":true}"#)]);

        let stats = read_intents(messages, tx).await;

        assert_eq!(stats, ReaderStats::default());
    }
}
