//! Timer command loop background task

use std::time::Duration;

use tokio::{
    sync::mpsc,
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::controller::{Command, Controller};

/// Single-worker loop that owns the [`Controller`]. User commands and clock
/// ticks are serialized through one `select!`, so the core never sees
/// concurrent mutation.
pub async fn timer_loop(mut controller: Controller, mut commands: mpsc::Receiver<Command>) {
    info!("Starting timer command loop");

    let mut clock = interval(Duration::from_secs(1));
    // A stalled host should resume ticking steadily, not burst-decrement.
    clock.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = clock.tick() => {
                controller.handle_tick().await;
            }
            command = commands.recv() => {
                match command {
                    Some(command) => {
                        let was_running = controller.is_running();
                        controller.handle_command(command);
                        // Align the first decrement a full second after start.
                        if controller.is_running() && !was_running {
                            clock.reset();
                        }
                    }
                    None => {
                        debug!("Command channel closed, stopping timer loop");
                        break;
                    }
                }
            }
        }
    }
}
