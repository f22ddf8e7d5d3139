//! Shutdown Timer - a background countdown that shuts down, restarts, or
//! sleeps the Mac
//!
//! This is the main entry point for the shutdown-timer application.

use std::sync::Arc;

use tokio::{net::TcpListener, sync::mpsc};
use tracing::info;

use shutdown_timer::{
    api::create_router,
    config::Config,
    controller::{Controller, TimerHandle},
    services::{check_osascript_available, AppleScriptExecutor, AppleScriptNotifier},
    state::AppState,
    tasks::timer_loop,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "shutdown_timer={},tower_http=info",
            config.log_level()
        ))
        .init();

    info!("Starting shutdown-timer v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, action={}, duration={}s",
        config.host, config.port, config.action, config.duration
    );

    // Check if osascript is available (required for power actions and notifications)
    if let Err(e) = check_osascript_available().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }

    // Build the controller and the single-worker command queue
    let (controller, status_rx) = Controller::new(
        config.action,
        config.duration,
        Arc::new(AppleScriptExecutor),
        Arc::new(AppleScriptNotifier),
    );
    let (command_tx, command_rx) = mpsc::channel(32);
    tokio::spawn(timer_loop(controller, command_rx));

    // Create application state for the HTTP layer
    let state = Arc::new(AppState::new(
        TimerHandle::new(command_tx),
        status_rx,
        config.port,
        config.host.clone(),
    ));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /action/:action     - Arm shutdown, restart, or sleep");
    info!("  POST /duration/:seconds  - Arm a countdown duration");
    info!("  POST /toggle             - Start or stop the countdown");
    info!("  GET  /durations          - Preset duration list");
    info!("  GET  /status             - Current timer status");
    info!("  GET  /health             - Health check");

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

    info!("Server shutdown complete");
    Ok(())
}
