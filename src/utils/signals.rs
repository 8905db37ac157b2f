//! Signal handling for graceful shutdown

use futures::stream::StreamExt;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tracing::info;

/// Wait for a shutdown signal (SIGTERM or SIGINT)
pub async fn shutdown_signal() {
    let mut signals = Signals::new([SIGTERM, SIGINT]).expect("Failed to create signal handler");

    if let Some(signal) = signals.next().await {
        info!("Received signal {}, shutting down", signal);
    }
}
