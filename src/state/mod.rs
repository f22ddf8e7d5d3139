//! State management module
//!
//! The countdown/selection core plus the context shared with the HTTP layer.

pub mod app_state;
pub mod countdown;
pub mod selection;
pub mod snapshot;

// Re-export main types
pub use app_state::AppState;
pub use countdown::{format_hms, CountdownEngine, TickOutcome};
pub use selection::{PowerAction, SelectionState, DURATION_PRESETS};
pub use snapshot::TimerSnapshot;
