//! Countdown Board - an HTTP-fronted countdown clock
//!
//! This is the main entry point for the countdown-board application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use countdown_board::{
    api::create_router,
    config::Config,
    sink::ConsoleSink,
    state::AppState,
    tasks::start_ticker,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "countdown_board={},tower_http=info",
            config.log_level()
        ))
        .init();

    info!("Starting countdown-board server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, halt_on_expiry={}",
        config.host, config.port, config.halt_on_expiry
    );

    // Create application state and attach the console display unless silenced
    let mut state = AppState::new(config.port, config.host.clone(), config.halt_on_expiry);
    if !config.quiet {
        state.attach_sink(Arc::new(ConsoleSink::new()));
    }
    let state = Arc::new(state);

    // Arm a countdown at boot when one was requested on the command line
    if let Some(seconds) = config.seconds {
        state
            .begin_countdown(seconds)
            .map_err(|e| anyhow::anyhow!("Failed to arm boot countdown: {}", e))?;
        let handle = start_ticker(Arc::clone(&state));
        state
            .set_ticker(handle)
            .map_err(|e| anyhow::anyhow!("Failed to store ticker handle: {}", e))?;
        info!("Boot countdown running from {} seconds", seconds);
    }

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start   - Arm the countdown ({{\"seconds\": n}}) and start ticking");
    info!("  POST /stop    - Cancel the running ticker");
    info!("  GET  /status  - Countdown snapshot and server metadata");
    info!("  GET  /display - Last rendered HH:MM:SS frame");
    info!("  GET  /health  - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    // Wind down a still-running ticker before exiting
    if let Ok(Some(handle)) = state.take_ticker() {
        handle.stop().await;
    }

    info!("Server shutdown complete");
    Ok(())
}
