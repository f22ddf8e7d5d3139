//! End-to-end flow through the timer command loop.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use futures::future::BoxFuture;
use tokio::sync::mpsc;

use shutdown_timer::{
    controller::{ActionExecutor, Controller, NotificationSink, TimerHandle},
    state::PowerAction,
    tasks::timer_loop,
    TimerError,
};

struct RecordingExecutor {
    performed: Arc<Mutex<Vec<PowerAction>>>,
}

impl ActionExecutor for RecordingExecutor {
    fn perform(&self, action: PowerAction) -> BoxFuture<'_, anyhow::Result<()>> {
        let performed = Arc::clone(&self.performed);
        Box::pin(async move {
            performed.lock().unwrap().push(action);
            Ok(())
        })
    }
}

struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _title: &str, _body: &str) -> BoxFuture<'_, anyhow::Result<()>> {
        Box::pin(async { Ok(()) })
    }
}

fn spawn_loop(
    action: PowerAction,
    duration: u64,
) -> (
    TimerHandle,
    Arc<Mutex<Vec<PowerAction>>>,
    tokio::sync::watch::Receiver<shutdown_timer::TimerSnapshot>,
) {
    let performed = Arc::new(Mutex::new(Vec::new()));
    let executor = Arc::new(RecordingExecutor {
        performed: Arc::clone(&performed),
    });
    let (controller, status_rx) = Controller::new(action, duration, executor, Arc::new(NullSink));
    let (tx, rx) = mpsc::channel(8);
    tokio::spawn(timer_loop(controller, rx));
    (TimerHandle::new(tx), performed, status_rx)
}

async fn tick_clock(seconds: u64) {
    for _ in 0..seconds {
        tokio::time::advance(Duration::from_secs(1)).await;
        // Let the loop task drain the expired tick before advancing again.
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }
}

#[tokio::test(start_paused = true)]
async fn countdown_fires_through_the_command_loop() {
    let (handle, performed, status_rx) = spawn_loop(PowerAction::Restart, 60);

    let snap = handle.select_duration(3).await.unwrap();
    assert_eq!(snap.duration_secs, 3);
    assert_eq!(snap.remaining_display, "00:00:03");

    let snap = handle.toggle_start().await.unwrap();
    assert!(snap.running);

    tick_clock(3).await;

    assert_eq!(performed.lock().unwrap().clone(), vec![PowerAction::Restart]);

    // Auto-reset after the fire: idle again with the armed duration on display.
    let snap = status_rx.borrow().clone();
    assert!(!snap.running);
    assert_eq!(snap.remaining_secs, 3);
}

#[tokio::test(start_paused = true)]
async fn toggling_off_stops_the_clock() {
    let (handle, performed, _status_rx) = spawn_loop(PowerAction::Shutdown, 5);

    handle.toggle_start().await.unwrap();
    tick_clock(2).await;

    let snap = handle.toggle_start().await.unwrap();
    assert!(!snap.running);
    assert_eq!(snap.remaining_secs, 5);

    // Time passing while idle must not fire anything.
    tick_clock(10).await;
    assert!(performed.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn duration_change_mid_countdown_stops_and_rearms() {
    let (handle, performed, _status_rx) = spawn_loop(PowerAction::Sleep, 30);

    handle.toggle_start().await.unwrap();
    tick_clock(10).await;

    let snap = handle.select_duration(60).await.unwrap();
    assert!(!snap.running);
    assert_eq!(snap.duration_secs, 60);
    assert_eq!(snap.remaining_display, "00:01:00");
    assert!(performed.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn invalid_duration_is_rejected_through_the_loop() {
    let (handle, _performed, _status_rx) = spawn_loop(PowerAction::Shutdown, 300);

    assert_eq!(
        handle.select_duration(0).await,
        Err(TimerError::InvalidDuration)
    );
    let snap = handle.select_action(PowerAction::Sleep).await.unwrap();
    assert_eq!(snap.duration_secs, 300);
    assert_eq!(snap.action, PowerAction::Sleep);
}
