//! Countdown engine: remaining time and the run/stop lifecycle

use crate::error::TimerError;

/// Outcome of delivering one clock tick to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick arrived while idle (e.g. racing a stop); ignored.
    Ignored,
    /// Still counting down; remaining seconds after the decrement.
    Running(u64),
    /// Remaining reached zero. The engine has already reset itself to idle
    /// with the armed duration on display; the caller performs the action.
    Fired,
}

/// Owns the remaining-time counter. While idle it displays the armed
/// duration; while running it decrements once per tick and fires exactly
/// once on reaching zero, then resets itself to idle.
///
/// The engine never knows what "firing" means. It only reports
/// [`TickOutcome::Fired`], which keeps the boundary logic testable without
/// touching the system.
#[derive(Debug, Clone)]
pub struct CountdownEngine {
    armed_secs: u64,
    remaining: Option<u64>,
}

impl CountdownEngine {
    pub fn new(armed_secs: u64) -> Self {
        Self {
            armed_secs,
            remaining: None,
        }
    }

    /// Set the duration displayed while idle and restored after a fire or
    /// stop. Callers stop the countdown before re-arming.
    pub fn arm(&mut self, secs: u64) {
        self.armed_secs = secs;
    }

    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    /// Begin counting down from `initial` seconds.
    pub fn start(&mut self, initial: u64) -> Result<(), TimerError> {
        if self.remaining.is_some() {
            return Err(TimerError::AlreadyRunning);
        }
        if initial == 0 {
            return Err(TimerError::InvalidDuration);
        }
        self.remaining = Some(initial);
        Ok(())
    }

    /// Return to idle. Safe to call at any time, including redundantly.
    pub fn stop(&mut self) {
        self.remaining = None;
    }

    /// Consume one clock tick. Decrements by exactly 1 (clamped, never
    /// negative) and fires exactly once when remaining hits zero.
    pub fn on_tick(&mut self) -> TickOutcome {
        match self.remaining {
            None => TickOutcome::Ignored,
            Some(remaining) => {
                let remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    self.remaining = None;
                    TickOutcome::Fired
                } else {
                    self.remaining = Some(remaining);
                    TickOutcome::Running(remaining)
                }
            }
        }
    }

    /// Remaining seconds while running, armed duration while idle.
    pub fn remaining_secs(&self) -> u64 {
        self.remaining.unwrap_or(self.armed_secs)
    }

    /// Remaining time as HH:MM:SS.
    pub fn remaining_display(&self) -> String {
        format_hms(self.remaining_secs())
    }
}

/// Format seconds as HH:MM:SS with floor division.
pub fn format_hms(secs: u64) -> String {
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_hms(display: &str) -> u64 {
        let mut parts = display.split(':').map(|p| p.parse::<u64>().unwrap());
        let (h, m, s) = (
            parts.next().unwrap(),
            parts.next().unwrap(),
            parts.next().unwrap(),
        );
        h * 3600 + m * 60 + s
    }

    #[test]
    fn idle_displays_armed_duration() {
        let engine = CountdownEngine::new(180);
        assert!(!engine.is_running());
        assert_eq!(engine.remaining_display(), "00:03:00");
    }

    #[test]
    fn start_while_running_is_rejected() {
        let mut engine = CountdownEngine::new(60);
        engine.start(60).unwrap();
        assert_eq!(engine.start(60), Err(TimerError::AlreadyRunning));
    }

    #[test]
    fn start_with_zero_is_rejected() {
        let mut engine = CountdownEngine::new(60);
        assert_eq!(engine.start(0), Err(TimerError::InvalidDuration));
        assert!(!engine.is_running());
    }

    #[test]
    fn exactly_one_fire_after_exact_tick_count() {
        let mut engine = CountdownEngine::new(5);
        engine.start(5).unwrap();

        let mut fires = 0;
        for _ in 0..5 {
            if engine.on_tick() == TickOutcome::Fired {
                fires += 1;
            }
        }
        assert_eq!(fires, 1);
        // Auto-reset: idle again, displaying the armed duration, not 00:00:00.
        assert!(!engine.is_running());
        assert_eq!(engine.remaining_secs(), 5);
    }

    #[test]
    fn ticks_while_idle_are_ignored() {
        let mut engine = CountdownEngine::new(60);
        assert_eq!(engine.on_tick(), TickOutcome::Ignored);

        engine.start(3).unwrap();
        engine.stop();
        // A tick racing the stop must not decrement or fire.
        assert_eq!(engine.on_tick(), TickOutcome::Ignored);
        assert_eq!(engine.remaining_secs(), 60);
    }

    #[test]
    fn stop_while_idle_is_a_noop() {
        let mut engine = CountdownEngine::new(60);
        engine.stop();
        assert!(!engine.is_running());
        assert_eq!(engine.remaining_secs(), 60);
    }

    #[test]
    fn display_round_trips_up_to_100_hours() {
        for secs in 0..360_000 {
            assert_eq!(parse_hms(&format_hms(secs)), secs);
        }
        assert_eq!(format_hms(3661), "01:01:01");
        assert_eq!(format_hms(359_999), "99:59:59");
    }
}
