//! Power actions via AppleScript

use anyhow::{bail, Context};
use futures::future::BoxFuture;
use tokio::process::Command;
use tracing::info;

use crate::{controller::ActionExecutor, state::PowerAction};

/// Performs power actions by telling Finder over `osascript`.
#[derive(Debug, Default)]
pub struct AppleScriptExecutor;

fn script_for(action: PowerAction) -> &'static str {
    match action {
        PowerAction::Shutdown => "tell application \"Finder\" to shut down",
        PowerAction::Restart => "tell application \"Finder\" to restart",
        PowerAction::Sleep => "tell application \"Finder\" to sleep",
    }
}

impl ActionExecutor for AppleScriptExecutor {
    fn perform(&self, action: PowerAction) -> BoxFuture<'_, anyhow::Result<()>> {
        Box::pin(async move {
            info!("Executing {} via osascript", action);

            let output = Command::new("osascript")
                .args(["-e", script_for(action)])
                .output()
                .await
                .context("Failed to execute osascript")?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                bail!("osascript {} failed: {}", action, stderr.trim());
            }

            info!("Power action {} command executed", action);
            Ok(())
        })
    }
}

/// Check if osascript is available on the system
pub async fn check_osascript_available() -> anyhow::Result<()> {
    Command::new("osascript")
        .args(["-e", "return"])
        .output()
        .await
        .context("osascript is not available. This app requires macOS.")?;

    info!("osascript is available");
    Ok(())
}
