//! Application context shared with the HTTP layer

use std::{sync::Mutex, time::Instant};

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use super::TimerSnapshot;
use crate::controller::TimerHandle;

/// Everything the HTTP handlers need: the command handle into the timer
/// loop, the snapshot watch, and server metadata.
#[derive(Debug)]
pub struct AppState {
    /// Command queue into the timer loop
    pub timer: TimerHandle,
    /// Latest published snapshot
    pub status_rx: watch::Receiver<TimerSnapshot>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last command tracking
    last_command: Mutex<Option<String>>,
    last_command_time: Mutex<Option<DateTime<Utc>>>,
}

impl AppState {
    pub fn new(
        timer: TimerHandle,
        status_rx: watch::Receiver<TimerSnapshot>,
        port: u16,
        host: String,
    ) -> Self {
        Self {
            timer,
            status_rx,
            start_time: Instant::now(),
            port,
            host,
            last_command: Mutex::new(None),
            last_command_time: Mutex::new(None),
        }
    }

    /// Current snapshot without going through the command queue.
    pub fn snapshot(&self) -> TimerSnapshot {
        self.status_rx.borrow().clone()
    }

    /// Record the most recent command for the status endpoint.
    pub fn record_command(&self, command: &str) {
        if let Ok(mut last) = self.last_command.lock() {
            *last = Some(command.to_string());
        }
        if let Ok(mut last_time) = self.last_command_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Get last command information
    pub fn last_command(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let command = self.last_command.lock().ok().and_then(|c| c.clone());
        let time = self.last_command_time.lock().ok().and_then(|t| *t);
        (command, time)
    }

    /// Calculate server uptime as a formatted string
    pub fn uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
