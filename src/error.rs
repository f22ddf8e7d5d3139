//! Error types for the timer core

use thiserror::Error;

/// Errors produced by the countdown/selection core and its command queue.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// A non-positive duration was supplied; the previous armed duration is kept.
    #[error("duration must be a positive number of seconds")]
    InvalidDuration,

    /// `start` was called while the countdown was already running. The toggle
    /// command gates this, so seeing it means an invariant was broken.
    #[error("countdown is already running")]
    AlreadyRunning,

    /// The timer command loop is gone and can no longer accept commands.
    #[error("timer control channel closed")]
    ControlChannelClosed,
}
