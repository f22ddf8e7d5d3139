//! Published view of the timer core

use serde::{Deserialize, Serialize};

use super::PowerAction;

/// Snapshot of the armed selection and countdown, published over a watch
/// channel after every state change. Readers only ever see this derived
/// view; they never touch the core directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub action: PowerAction,
    pub duration_secs: u64,
    pub running: bool,
    pub remaining_secs: u64,
    pub remaining_display: String,
}

impl TimerSnapshot {
    /// Label for the one start/stop menu button.
    pub fn toggle_label(&self) -> &'static str {
        if self.running {
            "Stop Timer"
        } else {
            "Start Timer"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_action_in_lowercase() {
        let snapshot = TimerSnapshot {
            action: PowerAction::Sleep,
            duration_secs: 300,
            running: false,
            remaining_secs: 300,
            remaining_display: "00:05:00".to_string(),
        };

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["action"], "sleep");
        assert_eq!(value["remaining_display"], "00:05:00");
    }

    #[test]
    fn toggle_label_follows_run_state() {
        let mut snapshot = TimerSnapshot {
            action: PowerAction::Shutdown,
            duration_secs: 60,
            running: false,
            remaining_secs: 60,
            remaining_display: "00:01:00".to_string(),
        };
        assert_eq!(snapshot.toggle_label(), "Start Timer");
        snapshot.running = true;
        assert_eq!(snapshot.toggle_label(), "Stop Timer");
    }
}
