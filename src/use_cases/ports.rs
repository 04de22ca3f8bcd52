// Outbound port for the session loop.

use async_trait::async_trait;

use super::types::SessionFrame;

/// Delivers session frames to the connected client.
///
/// Any error is terminal for the session; the loop never retries a failed send.
#[async_trait]
pub trait FrameSink: Send {
    type Error: std::fmt::Debug + Send;

    async fn send_frame(&mut self, frame: SessionFrame) -> Result<(), Self::Error>;
}
