//! Signal handling for graceful shutdown

use anyhow::Context;
use futures::stream::StreamExt;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tracing::{info, warn};

/// Resolve once the first SIGTERM or SIGINT arrives.
pub async fn shutdown_signal() {
    let mut signals =
        match Signals::new([SIGTERM, SIGINT]).context("Failed to install signal handler") {
            Ok(signals) => signals,
            Err(e) => {
                // Without handlers we cannot shut down gracefully; wait
                // forever and let the default disposition kill the process.
                warn!("{:#}", e);
                return std::future::pending().await;
            }
        };

    if let Some(signal) = signals.next().await {
        info!("Received signal: {}", signal);
    }
}
