use crate::interface_adapters::protocol::ServerMessage;
use crate::use_cases::{FrameSink, SessionFrame};

use async_trait::async_trait;
use axum::extract::ws::Message;
use futures::{Sink, SinkExt};
use std::fmt;

#[derive(Debug)]
pub enum NetError {
    Ws(axum::Error),
    Serialization(serde_json::Error),
}

impl fmt::Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetError::Ws(e) => write!(f, "websocket error: {e}"),
            NetError::Serialization(e) => write!(f, "serialization error: {e}"),
        }
    }
}

impl std::error::Error for NetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NetError::Ws(e) => Some(e),
            NetError::Serialization(e) => Some(e),
        }
    }
}

impl From<axum::Error> for NetError {
    fn from(e: axum::Error) -> Self {
        NetError::Ws(e)
    }
}

/// Serializes session frames to JSON text messages on the socket's write half.
pub struct WsFrameSink<S> {
    inner: S,
    pub msgs_out: u64,
    pub bytes_out: u64,
}

impl<S> WsFrameSink<S>
where
    S: Sink<Message, Error = axum::Error> + Unpin + Send,
{
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            msgs_out: 0,
            bytes_out: 0,
        }
    }

    /// Best-effort close frame; the session is over either way.
    pub async fn close(&mut self) -> Result<(), NetError> {
        self.inner.close().await.map_err(NetError::Ws)
    }
}

#[async_trait]
impl<S> FrameSink for WsFrameSink<S>
where
    S: Sink<Message, Error = axum::Error> + Unpin + Send,
{
    type Error = NetError;

    async fn send_frame(&mut self, frame: SessionFrame) -> Result<(), NetError> {
        let msg = ServerMessage::from(frame);
        let txt = serde_json::to_string(&msg).map_err(NetError::Serialization)?;
        let bytes = txt.len() as u64;
        self.inner.send(Message::Text(txt.into())).await?;
        self.msgs_out += 1;
        self.bytes_out += bytes;
        Ok(())
    }
}
