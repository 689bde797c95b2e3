use crate::match_controller::MatchController;
use futsal_common::snapshot::MatchSnapshot;
use log::*;
use std::sync::{Arc, Mutex};
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{Duration, Instant, timeout_at},
};

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Drives the match clock at one tick per second while it is running.
///
/// At most one ticker exists per controller. The task sleeps until the next
/// tick deadline or until the controller's running flag changes, whichever
/// comes first; a pending tick is abandoned, never fired, when the clock
/// stops. Each applied tick publishes a fresh snapshot for renderers.
#[derive(Debug)]
pub struct ClockTicker {
    handle: JoinHandle<()>,
}

impl ClockTicker {
    pub fn spawn(
        controller: Arc<Mutex<MatchController>>,
        snapshot_tx: watch::Sender<MatchSnapshot>,
    ) -> Self {
        let mut running_rx = controller.lock().unwrap().clock_running_receiver();

        let handle = tokio::spawn(async move {
            debug!("Ticker started");
            let mut next_time: Option<Instant> = None;

            loop {
                match next_time {
                    Some(deadline) => match timeout_at(deadline, running_rx.changed()).await {
                        Err(_) => {
                            // Deadline reached with no state change: apply the tick
                            let mut controller = controller.lock().unwrap();
                            controller.tick();
                            let still_running = controller.clock_is_running();
                            let snapshot = controller.snapshot();
                            drop(controller);

                            if snapshot_tx.send(snapshot).is_err() {
                                return;
                            }
                            next_time = still_running.then(|| deadline + TICK_PERIOD);
                        }
                        Ok(Err(_)) => return,
                        Ok(Ok(())) => {
                            let running = *running_rx.borrow_and_update();
                            debug!("Received clock running message: {running}");
                            next_time = running.then(|| Instant::now() + TICK_PERIOD);
                        }
                    },
                    None => match running_rx.changed().await {
                        Err(_) => return,
                        Ok(()) => {
                            let running = *running_rx.borrow_and_update();
                            debug!("Received clock running message: {running}");
                            next_time = running.then(|| Instant::now() + TICK_PERIOD);
                        }
                    },
                }
            }
        });

        Self { handle }
    }

    pub fn stop(self) {
        self.handle.abort();
    }
}
