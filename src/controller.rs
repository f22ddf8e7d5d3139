//! Command handling for the countdown/selection core
//!
//! The [`Controller`] is the single writer of the armed selection and the
//! countdown. It is owned by the timer loop task; everything else talks to
//! it through a [`TimerHandle`] and observes it through the snapshot watch
//! channel.

use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{error, info, warn};

use crate::{
    error::TimerError,
    state::{CountdownEngine, PowerAction, SelectionState, TickOutcome, TimerSnapshot},
};

/// Title used for every notification this app delivers.
pub const NOTIFICATION_TITLE: &str = "Shutdown Timer";

/// Performs the armed power action when the countdown fires. The core never
/// inspects how; failures are logged once and never retried.
pub trait ActionExecutor: Send + Sync {
    fn perform(&self, action: PowerAction) -> BoxFuture<'_, anyhow::Result<()>>;
}

/// Delivers a user-visible notification. Best effort; failures never affect
/// the countdown or the action.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, title: &str, body: &str) -> BoxFuture<'_, anyhow::Result<()>>;
}

pub type CommandResult = Result<TimerSnapshot, TimerError>;

/// A user command delivered to the timer loop. Each carries a reply slot so
/// the HTTP layer can return the resulting snapshot.
#[derive(Debug)]
pub enum Command {
    SelectAction {
        action: PowerAction,
        reply: oneshot::Sender<CommandResult>,
    },
    SelectDuration {
        secs: u64,
        reply: oneshot::Sender<CommandResult>,
    },
    ToggleStart {
        reply: oneshot::Sender<CommandResult>,
    },
}

/// Cloneable sender side of the command queue.
#[derive(Debug, Clone)]
pub struct TimerHandle {
    tx: mpsc::Sender<Command>,
}

impl TimerHandle {
    pub fn new(tx: mpsc::Sender<Command>) -> Self {
        Self { tx }
    }

    pub async fn select_action(&self, action: PowerAction) -> CommandResult {
        self.request(|reply| Command::SelectAction { action, reply })
            .await
    }

    pub async fn select_duration(&self, secs: u64) -> CommandResult {
        self.request(|reply| Command::SelectDuration { secs, reply })
            .await
    }

    pub async fn toggle_start(&self) -> CommandResult {
        self.request(|reply| Command::ToggleStart { reply }).await
    }

    async fn request<F>(&self, make: F) -> CommandResult
    where
        F: FnOnce(oneshot::Sender<CommandResult>) -> Command,
    {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(make(reply_tx))
            .await
            .map_err(|_| TimerError::ControlChannelClosed)?;
        reply_rx
            .await
            .map_err(|_| TimerError::ControlChannelClosed)?
    }
}

/// Composes [`SelectionState`] and [`CountdownEngine`] and maps each user
/// command to exactly one state transition.
pub struct Controller {
    selection: SelectionState,
    engine: CountdownEngine,
    executor: Arc<dyn ActionExecutor>,
    notifier: Arc<dyn NotificationSink>,
    status_tx: watch::Sender<TimerSnapshot>,
}

impl Controller {
    /// Build a controller with the given starting selection. Returns the
    /// receiver side of the snapshot watch for observers.
    pub fn new(
        action: PowerAction,
        duration_secs: u64,
        executor: Arc<dyn ActionExecutor>,
        notifier: Arc<dyn NotificationSink>,
    ) -> (Self, watch::Receiver<TimerSnapshot>) {
        let selection = SelectionState::new(action, duration_secs);
        let engine = CountdownEngine::new(selection.armed_duration());
        let initial = snapshot_of(&selection, &engine);
        let (status_tx, status_rx) = watch::channel(initial);

        (
            Self {
                selection,
                engine,
                executor,
                notifier,
                status_tx,
            },
            status_rx,
        )
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        snapshot_of(&self.selection, &self.engine)
    }

    /// Handle one queued user command. Never async: commands alone never
    /// fire the action.
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::SelectAction { action, reply } => {
                self.select_action(action);
                let _ = reply.send(Ok(self.snapshot()));
            }
            Command::SelectDuration { secs, reply } => {
                let result = self.select_duration(secs).map(|()| self.snapshot());
                let _ = reply.send(result);
            }
            Command::ToggleStart { reply } => {
                self.toggle_start();
                let _ = reply.send(Ok(self.snapshot()));
            }
        }
    }

    /// Arm a power action. Deliberately does not stop a running countdown;
    /// only duration changes do.
    pub fn select_action(&mut self, action: PowerAction) {
        self.selection.select_action(action);
        info!("armed action set to {}", action);
        self.publish();
    }

    /// Arm a duration. A running countdown is stopped first, so the display
    /// resets to the newly armed value.
    pub fn select_duration(&mut self, secs: u64) -> Result<(), TimerError> {
        // Validate before touching the engine: a rejected selection must
        // leave a running countdown running.
        self.selection.select_duration(secs)?;
        if self.engine.is_running() {
            self.engine.stop();
            info!("countdown stopped for duration change");
        }
        self.engine.arm(secs);
        info!("armed duration set to {}s", secs);
        self.publish();
        Ok(())
    }

    /// The one start/stop button.
    pub fn toggle_start(&mut self) {
        if self.engine.is_running() {
            self.engine.stop();
            info!("countdown stopped");
        } else {
            let duration = self.selection.armed_duration();
            match self.engine.start(duration) {
                Ok(()) => info!(
                    "countdown started: {}s until {}",
                    duration,
                    self.selection.armed_action()
                ),
                // Unreachable through the toggle gate; an invariant breach.
                Err(e) => error!("countdown failed to start: {}", e),
            }
        }
        self.publish();
    }

    /// Deliver one clock tick. On fire, performs the armed action and sends
    /// the notification, in that order.
    pub async fn handle_tick(&mut self) {
        match self.engine.on_tick() {
            TickOutcome::Ignored => {}
            TickOutcome::Running(_) => self.publish(),
            TickOutcome::Fired => {
                let action = self.selection.armed_action();
                info!("countdown fired, performing {}", action);
                self.fire(action).await;
                self.publish();
            }
        }
    }

    /// Fire-and-forget: an executor failure is logged once and the countdown
    /// stays disarmed; the notification is attempted either way.
    async fn fire(&self, action: PowerAction) {
        if let Err(e) = self.executor.perform(action).await {
            error!("power action {} failed: {:#}", action, e);
        }
        if let Err(e) = self
            .notifier
            .notify(NOTIFICATION_TITLE, action.notification_body())
            .await
        {
            warn!("notification delivery failed: {:#}", e);
        }
    }

    fn publish(&self) {
        self.status_tx.send_replace(self.snapshot());
    }
}

fn snapshot_of(selection: &SelectionState, engine: &CountdownEngine) -> TimerSnapshot {
    TimerSnapshot {
        action: selection.armed_action(),
        duration_secs: selection.armed_duration(),
        running: engine.is_running(),
        remaining_secs: engine.remaining_secs(),
        remaining_display: engine.remaining_display(),
    }
}
