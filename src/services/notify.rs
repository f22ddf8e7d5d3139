//! User notifications via AppleScript

use anyhow::{bail, Context};
use futures::future::BoxFuture;
use tokio::process::Command;
use tracing::debug;

use crate::controller::NotificationSink;

/// Delivers notifications through `osascript -e 'display notification ...'`.
#[derive(Debug, Default)]
pub struct AppleScriptNotifier;

impl NotificationSink for AppleScriptNotifier {
    fn notify(&self, title: &str, body: &str) -> BoxFuture<'_, anyhow::Result<()>> {
        // Titles and bodies are fixed strings without quotes; escape anyway.
        let script = format!(
            "display notification \"{}\" with title \"{}\"",
            body.replace('"', "\\\""),
            title.replace('"', "\\\"")
        );
        let body = body.to_string();

        Box::pin(async move {
            debug!("Delivering notification: {}", body);

            let output = Command::new("osascript")
                .args(["-e", &script])
                .output()
                .await
                .context("Failed to execute osascript for notification")?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                bail!("notification delivery failed: {}", stderr.trim());
            }

            Ok(())
        })
    }
}
