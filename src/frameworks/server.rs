// Framework bootstrap for the simulation server runtime.

use crate::frameworks::config;
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::AppState;
use crate::use_cases::{Game, GenerationSettings};

use std::net::SocketAddr;
use std::{io::Result, sync::Arc, time::Duration};
use tokio::sync::Notify;

/// Everything needed to build and drive one world.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub generation: GenerationSettings,
    pub tick_interval: Duration,
}

impl ServerSettings {
    pub fn from_env() -> Self {
        Self {
            generation: GenerationSettings {
                width: config::world_width(),
                height: config::world_height(),
                seed: config::world_seed(),
            },
            tick_interval: config::tick_interval(),
        }
    }
}

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

pub async fn run(listener: tokio::net::TcpListener, settings: ServerSettings) -> Result<()> {
    let address = listener.local_addr()?;
    let game = build_game(&settings)?;

    // The ticker owns a handle to the world for the process lifetime.
    let shutdown = Arc::new(Notify::new());
    let ticker = game
        .clone()
        .spawn_ticker(settings.tick_interval, shutdown.clone());

    let app = app(AppState { game });
    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    let served = axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    });

    shutdown.notify_one();
    let _ = ticker.await;
    served
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, ServerSettings::from_env()).await
}

fn build_game(settings: &ServerSettings) -> Result<Arc<Game>> {
    let game = Game::generate(&settings.generation)
        .map_err(|e| std::io::Error::other(format!("failed to generate world: {e}")))?;
    tracing::debug!(
        tick_interval_ms = settings.tick_interval.as_millis(),
        "world ready"
    );
    Ok(Arc::new(game))
}
