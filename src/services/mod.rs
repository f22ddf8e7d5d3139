//! External capability implementations
//!
//! Concrete [`ActionExecutor`](crate::controller::ActionExecutor) and
//! [`NotificationSink`](crate::controller::NotificationSink) backends that
//! shell out to the OS.

pub mod notify;
pub mod power;

// Re-export main types
pub use notify::AppleScriptNotifier;
pub use power::{check_osascript_available, AppleScriptExecutor};
