//! site-assistant server entry point.
//!
//! Startup order:
//! 1. Load and validate configuration.
//! 2. Initialise tracing (JSON in production, pretty otherwise).
//! 3. Build the OpenAI provider, if a key is configured.
//! 4. Serve the router with graceful shutdown.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use site_assistant::adapters::ai::OpenAIProvider;
use site_assistant::adapters::http::{app_router, ChatAppState};
use site_assistant::application::handlers::RelayChatHandler;
use site_assistant::config::AppConfig;
use site_assistant::ports::AIProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);
    if config.is_production() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    config.validate()?;
    info!(version = env!("CARGO_PKG_VERSION"), "site-assistant starting");

    let provider: Option<Arc<dyn AIProvider>> = match config.ai.openai_config() {
        Some(openai) => {
            let provider = OpenAIProvider::new(openai)?;
            let provider_info = provider.provider_info();
            info!(
                provider = %provider_info.name,
                model = %provider_info.model,
                max_context_tokens = provider_info.max_context_tokens,
                "AI provider ready"
            );
            Some(Arc::new(provider))
        }
        None => {
            warn!("OPENAI_API_KEY not set; chat requests will report a configuration error");
            None
        }
    };

    let handler = RelayChatHandler::new(provider, config.ai.completion_settings());
    let app = app_router(ChatAppState::new(Arc::new(handler)), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("site-assistant stopped");
    Ok(())
}

/// Resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received; starting graceful shutdown");
}
