use std::{env, path::PathBuf, time::Duration};

// Runtime/server settings (not gameplay tuning).

pub fn http_port() -> u16 {
    env::var("INVADERS_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080)
}

/// Directory holding the browser client.
pub fn static_dir() -> PathBuf {
    env::var("INVADERS_STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./static"))
}

pub const INPUT_QUEUE_CAPACITY: usize = 16;

pub const TICK_INTERVAL: Duration = Duration::from_millis(80);
