// WebSocket adapter: the upgrade handler, the inbound reader and the outbound frame sink.

pub mod client;
pub mod sink;

pub use client::ws_handler;
pub use sink::{NetError, WsFrameSink};
