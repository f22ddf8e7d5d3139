//! Armed power action and armed duration

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::TimerError;

/// Durations offered by the menu layer (1/3/5/10/15/30/60 minutes).
/// The core accepts any positive number of seconds; this list is a UI convenience.
pub const DURATION_PRESETS: [u64; 7] = [60, 180, 300, 600, 900, 1800, 3600];

/// The power action performed when the countdown fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PowerAction {
    Shutdown,
    Restart,
    Sleep,
}

impl PowerAction {
    /// Fixed notification body delivered when this action is triggered.
    pub fn notification_body(&self) -> &'static str {
        match self {
            PowerAction::Shutdown => "Mac shut down triggered",
            PowerAction::Restart => "Mac restart triggered",
            PowerAction::Sleep => "Mac sleep triggered",
        }
    }
}

impl fmt::Display for PowerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerAction::Shutdown => write!(f, "shutdown"),
            PowerAction::Restart => write!(f, "restart"),
            PowerAction::Sleep => write!(f, "sleep"),
        }
    }
}

impl Default for PowerAction {
    fn default() -> Self {
        PowerAction::Shutdown
    }
}

/// Holds the currently armed action and duration. Each axis is a single
/// typed field, so "exactly one armed" holds by construction.
#[derive(Debug, Clone)]
pub struct SelectionState {
    action: PowerAction,
    duration_secs: u64,
}

impl SelectionState {
    /// Create a selection with the given starting values. A zero duration is
    /// replaced by the one-minute default.
    pub fn new(action: PowerAction, duration_secs: u64) -> Self {
        Self {
            action,
            duration_secs: if duration_secs == 0 { 60 } else { duration_secs },
        }
    }

    /// Arm `action`, disarming whichever was armed before. Idempotent.
    pub fn select_action(&mut self, action: PowerAction) {
        self.action = action;
    }

    /// Arm a duration in seconds. Rejects zero and keeps the prior value.
    pub fn select_duration(&mut self, secs: u64) -> Result<(), TimerError> {
        if secs == 0 {
            return Err(TimerError::InvalidDuration);
        }
        self.duration_secs = secs;
        Ok(())
    }

    pub fn armed_action(&self) -> PowerAction {
        self.action
    }

    pub fn armed_duration(&self) -> u64 {
        self.duration_secs
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(PowerAction::default(), 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_selected_action_is_the_armed_one() {
        let mut selection = SelectionState::default();
        assert_eq!(selection.armed_action(), PowerAction::Shutdown);

        for action in [
            PowerAction::Sleep,
            PowerAction::Restart,
            PowerAction::Restart,
            PowerAction::Shutdown,
            PowerAction::Sleep,
        ] {
            selection.select_action(action);
            assert_eq!(selection.armed_action(), action);
        }
    }

    #[test]
    fn valid_duration_replaces_previous() {
        let mut selection = SelectionState::default();
        for secs in DURATION_PRESETS {
            selection.select_duration(secs).unwrap();
            assert_eq!(selection.armed_duration(), secs);
        }
        // Not limited to presets.
        selection.select_duration(42).unwrap();
        assert_eq!(selection.armed_duration(), 42);
    }

    #[test]
    fn zero_duration_is_rejected_and_previous_kept() {
        let mut selection = SelectionState::default();
        selection.select_duration(300).unwrap();
        assert_eq!(selection.select_duration(0), Err(TimerError::InvalidDuration));
        assert_eq!(selection.armed_duration(), 300);
    }
}
