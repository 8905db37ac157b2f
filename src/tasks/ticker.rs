//! Countdown ticker background task

use std::{sync::Arc, time::Duration};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::state::{AppState, Phase};

/// Fixed cadence of the countdown tick
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Owned handle of a running ticker task
///
/// Dropping the handle does not stop the task; call [`stop`] to cancel it.
///
/// [`stop`]: TickerHandle::stop
#[derive(Debug)]
pub struct TickerHandle {
    cancel_tx: watch::Sender<bool>,
    join: JoinHandle<()>,
}

impl TickerHandle {
    /// Cancel the ticker and wait for it to wind down
    pub async fn stop(self) {
        if self.cancel_tx.send(true).is_err() {
            debug!("Ticker already finished, nothing to cancel");
        }
        let _ = self.join.await;
    }

    /// Resolves once the task stops on its own, e.g. halted at expiry
    pub async fn finished(self) {
        let _ = self.join.await;
    }

    /// Whether the ticker task has already exited
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}

/// Spawn the periodic countdown task
///
/// Once per second the task advances the shared countdown, renders the frame
/// and pushes it to every attached sink. The first tick fires one full period
/// after start, so a countdown armed with `n` seconds shows `n - 1` on its
/// first frame. A sink write failure is logged and does not stop the task.
///
/// When the countdown expires the task either keeps re-rendering `00:00:00`
/// every second (the default) or stops itself, depending on the state's
/// `halt_on_expiry` flag.
pub fn start_ticker(state: Arc<AppState>) -> TickerHandle {
    info!("Starting countdown ticker");

    let (cancel_tx, mut cancel_rx) = watch::channel(false);
    let sinks = state.sinks();
    let halt_on_expiry = state.halt_on_expiry;

    let join = tokio::spawn(async move {
        // first tick lands one full period after start, like a wall clock
        let mut ticks = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticks.tick() => {
                    let (phase, frame) = match state.tick_and_render() {
                        Ok(result) => result,
                        Err(e) => {
                            error!("Failed to advance countdown: {}", e);
                            break;
                        }
                    };

                    for sink in &sinks {
                        if let Err(e) = sink.write_frame(&frame) {
                            warn!("Display sink '{}' write failed: {}", sink.name(), e);
                        }
                    }

                    if phase == Phase::Expired && halt_on_expiry {
                        info!("Countdown expired, halting ticker");
                        break;
                    }
                }

                result = cancel_rx.changed() => {
                    if result.is_err() || *cancel_rx.borrow() {
                        info!("Countdown ticker cancelled");
                        break;
                    }
                }
            }
        }
    });

    TickerHandle { cancel_tx, join }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    fn armed_state(seconds: u64, halt_on_expiry: bool) -> Arc<AppState> {
        let state = Arc::new(AppState::new(0, "127.0.0.1".to_string(), halt_on_expiry));
        state.begin_countdown(seconds).unwrap();
        state
    }

    #[tokio::test(start_paused = true)]
    async fn each_tick_publishes_the_next_frame() {
        let state = armed_state(125, false);
        let mut frames = state.subscribe_frames();
        frames.borrow_and_update();

        let handle = start_ticker(Arc::clone(&state));

        frames.changed().await.unwrap();
        assert_eq!(*frames.borrow_and_update(), "00:02:04");
        frames.changed().await.unwrap();
        assert_eq!(*frames.borrow_and_update(), "00:02:03");
        frames.changed().await.unwrap();
        assert_eq!(*frames.borrow_and_update(), "00:02:02");

        handle.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn expired_countdown_keeps_rendering_by_default() {
        let state = armed_state(1, false);
        let mut frames = state.subscribe_frames();
        frames.borrow_and_update();

        let handle = start_ticker(Arc::clone(&state));

        frames.changed().await.unwrap();
        assert_eq!(*frames.borrow_and_update(), "00:00:00");

        // the expired clock still gets re-written every second
        for _ in 0..3 {
            frames.changed().await.unwrap();
            assert_eq!(*frames.borrow_and_update(), "00:00:00");
        }
        assert!(!handle.is_finished());

        handle.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn halt_on_expiry_stops_the_task_at_zero() {
        let state = armed_state(2, true);
        let mut frames = state.subscribe_frames();
        frames.borrow_and_update();

        let handle = start_ticker(Arc::clone(&state));

        frames.changed().await.unwrap();
        assert_eq!(*frames.borrow_and_update(), "00:00:01");
        frames.changed().await.unwrap();
        assert_eq!(*frames.borrow_and_update(), "00:00:00");

        handle.finished().await;
        assert_eq!(state.snapshot().unwrap().remaining_seconds, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_future_ticks() {
        let state = armed_state(600, false);
        let mut frames = state.subscribe_frames();
        frames.borrow_and_update();

        let handle = start_ticker(Arc::clone(&state));

        frames.changed().await.unwrap();
        assert_eq!(*frames.borrow_and_update(), "00:09:59");

        handle.stop().await;
        let remaining = state.snapshot().unwrap().remaining_seconds;

        advance(Duration::from_secs(5)).await;
        assert!(!frames.has_changed().unwrap());
        assert_eq!(state.snapshot().unwrap().remaining_seconds, remaining);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_second_countdown_renders_zero_forever() {
        let state = armed_state(0, false);
        let mut frames = state.subscribe_frames();
        frames.borrow_and_update();

        let handle = start_ticker(Arc::clone(&state));

        frames.changed().await.unwrap();
        assert_eq!(*frames.borrow_and_update(), "00:00:00");
        frames.changed().await.unwrap();
        assert_eq!(*frames.borrow_and_update(), "00:00:00");

        handle.stop().await;
    }
}
