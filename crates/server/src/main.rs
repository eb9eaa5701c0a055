//! Call agent server entry point

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use call_agent_config::{load_settings, Settings};
use call_agent_server::{create_router, AppState};
use call_agent_synthesis::{ClipStore, CLIP_MAX_AGE, CLIP_SWEEP_INTERVAL};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Priority: env vars > config/{env}.yaml > config/default.yaml > defaults
    let env = std::env::var("CALL_AGENT_ENV").ok();
    let settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized, use eprintln for early logging
            eprintln!("Warning: failed to load config: {e}. Using defaults.");
            Settings::default()
        }
    };

    init_tracing(&settings);

    tracing::info!("Starting call agent server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        environment = ?settings.environment,
        llm_configured = settings.llm.api_key.is_some(),
        tts_configured = settings.tts.api_key.is_some(),
        "Configuration loaded"
    );
    if settings.tts.api_key.is_none() {
        tracing::warn!("No TTS credential; replies will use spoken markup only");
    }

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = AppState::from_settings(settings)?;
    spawn_clip_sweep(Arc::clone(&state.clips));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Periodically reclaim synthesized clips the telephony provider is no
/// longer going to fetch, so the store does not grow for the process
/// lifetime.
fn spawn_clip_sweep(clips: Arc<ClipStore>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CLIP_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let evicted = clips.evict_expired(CLIP_MAX_AGE);
            if evicted > 0 {
                tracing::debug!(evicted, remaining = clips.len(), "reclaimed expired audio clips");
            }
        }
    });
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

/// Initialize tracing with an env-filter fallback from settings
fn init_tracing(settings: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("call_agent={},tower_http=info", settings.log_level).into()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
