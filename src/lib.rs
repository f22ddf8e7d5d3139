//! Shutdown Timer - a background countdown that shuts down, restarts, or
//! sleeps the Mac
//!
//! The core is the countdown/action state machine: one armed power action,
//! one armed duration, and a single start/stop toggle. A small HTTP surface
//! drives it and observes it; the OS power call and notifications sit behind
//! capability traits.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use controller::{ActionExecutor, Controller, NotificationSink, TimerHandle};
pub use error::TimerError;
pub use state::{AppState, PowerAction, TimerSnapshot};
pub use tasks::timer_loop;
pub use utils::shutdown_signal;
