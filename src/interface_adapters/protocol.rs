// Wire protocol DTOs and conversions for the public WebSocket.

use crate::domain::{GameSnapshot, Intent};
use crate::use_cases::SessionFrame;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Messages the server sends to the connected client.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ServerMessage {
    // Visible state after each tick.
    GameState(GameStateDto),
    // Sent once when the last life is lost.
    GameOver(GameOverDto),
}

impl From<SessionFrame> for ServerMessage {
    fn from(frame: SessionFrame) -> Self {
        match frame {
            SessionFrame::Snapshot(snapshot) => ServerMessage::GameState(snapshot.into()),
            SessionFrame::GameOver => ServerMessage::GameOver(GameOverDto { game_over: true }),
        }
    }
}

/// Per-tick input the client sends; absent fields read as false.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntentDto {
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    #[serde(default)]
    pub shoot: bool,
}

impl From<IntentDto> for Intent {
    fn from(input: IntentDto) -> Self {
        Self {
            left: input.left,
            right: input.right,
            shoot: input.shoot,
        }
    }
}

/// Decodes one inbound payload. Anything that is not an intent object yields `None`.
///
/// The derived `Deserialize` also accepts sequences, so the object shape is checked first.
pub fn decode_intent(payload: &[u8]) -> Option<Intent> {
    let value = serde_json::from_slice::<Value>(payload).ok()?;
    if !value.is_object() {
        return None;
    }
    serde_json::from_value::<IntentDto>(value)
        .ok()
        .map(Intent::from)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateDto {
    pub width: i32,
    pub height: i32,
    pub player_x: i32,
    pub player_y: i32,
    pub invaders: Vec<[i32; 2]>,
    pub bullets: Vec<[i32; 2]>,
    pub score: u32,
    pub lives: i32,
}

impl From<GameSnapshot> for GameStateDto {
    fn from(snapshot: GameSnapshot) -> Self {
        Self {
            width: snapshot.width,
            height: snapshot.height,
            player_x: snapshot.player_x,
            player_y: snapshot.player_y,
            invaders: snapshot.invaders.into_iter().map(|(x, y)| [x, y]).collect(),
            bullets: snapshot.bullets.into_iter().map(|(x, y)| [x, y]).collect(),
            score: snapshot.score,
            lives: snapshot.lives,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GameOverDto {
    #[serde(rename = "gameOver")]
    pub game_over: bool,
}
