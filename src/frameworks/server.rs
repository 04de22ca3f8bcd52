// Framework bootstrap for the game server runtime.

use crate::domain::tuning::{invader::InvaderTuning, player::PlayerTuning};
use crate::frameworks::config;
use crate::interface_adapters::net::ws_handler;
use crate::interface_adapters::state::AppState;

use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::path::Path;
use std::{io::Result, sync::Arc};
use tower_http::services::ServeDir;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Routes: `/ws` hosts one game session per socket, everything else is static client files.
pub fn app(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/ws", get(ws_handler))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let address = listener.local_addr()?;
    let static_dir = config::static_dir();

    let state = Arc::new(AppState {
        tick_interval: config::TICK_INTERVAL,
        input_queue_capacity: config::INPUT_QUEUE_CAPACITY,
        player_tuning: PlayerTuning::default(),
        invader_tuning: InvaderTuning::default(),
    });
    let app = app(state, &static_dir);

    tracing::info!(%address, static_dir = %static_dir.display(), "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([0, 0, 0, 0], config::http_port()));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}
