//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::info;

use crate::sink::{DisplaySink, FrameChannelSink};
use crate::tasks::TickerHandle;
use super::{Countdown, CountdownSnapshot, Phase};

/// Main application state shared by the HTTP handlers and the ticker task
#[derive(Debug)]
pub struct AppState {
    /// The countdown, mutated once per tick by the ticker task
    countdown: Mutex<Countdown>,
    /// Handle of the currently running ticker, if any
    ticker: Mutex<Option<TickerHandle>>,
    /// Sinks that receive each rendered frame
    sinks: Vec<Arc<dyn DisplaySink>>,
    /// Whether the ticker stops itself once the countdown expires
    pub halt_on_expiry: bool,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    last_action: Mutex<Option<String>>,
    last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Latest frame written to the frame-channel sink
    frame_tx: watch::Sender<String>,
    /// Keep one receiver alive so sink writes never fail for lack of readers
    frame_rx: watch::Receiver<String>,
}

impl AppState {
    /// Create a new AppState with an idle countdown
    ///
    /// A frame-channel sink backed by the state's own watch channel is always
    /// attached; further sinks can be added with [`attach_sink`] before the
    /// state is shared.
    ///
    /// [`attach_sink`]: AppState::attach_sink
    pub fn new(port: u16, host: String, halt_on_expiry: bool) -> Self {
        let countdown = Countdown::default();
        let (frame_tx, frame_rx) = watch::channel(countdown.display());
        let sinks: Vec<Arc<dyn DisplaySink>> =
            vec![Arc::new(FrameChannelSink::new(frame_tx.clone()))];

        Self {
            countdown: Mutex::new(countdown),
            ticker: Mutex::new(None),
            sinks,
            halt_on_expiry,
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            frame_tx,
            frame_rx,
        }
    }

    /// Attach an additional display sink
    pub fn attach_sink(&mut self, sink: Arc<dyn DisplaySink>) {
        self.sinks.push(sink);
    }

    /// Sinks that should receive each rendered frame
    pub fn sinks(&self) -> Vec<Arc<dyn DisplaySink>> {
        self.sinks.clone()
    }

    /// Replace the countdown with a fresh one holding `initial_seconds`
    ///
    /// No frame is written here: the display only changes on ticks, so the
    /// first frame of a new countdown appears one tick period after start.
    pub fn begin_countdown(&self, initial_seconds: u64) -> Result<CountdownSnapshot, String> {
        let mut countdown = self
            .countdown
            .lock()
            .map_err(|e| format!("Failed to lock countdown state: {}", e))?;

        *countdown = Countdown::new(initial_seconds);
        let snapshot = CountdownSnapshot::of(&countdown);
        drop(countdown);

        self.record_action(&format!("start {}s", initial_seconds));
        info!("Countdown armed with {} seconds", initial_seconds);
        Ok(snapshot)
    }

    /// Advance the countdown by one tick and render the resulting frame
    pub fn tick_and_render(&self) -> Result<(Phase, String), String> {
        let mut countdown = self
            .countdown
            .lock()
            .map_err(|e| format!("Failed to lock countdown state: {}", e))?;

        let phase = countdown.tick();
        Ok((phase, countdown.display()))
    }

    /// Get a point-in-time view of the countdown
    pub fn snapshot(&self) -> Result<CountdownSnapshot, String> {
        self.countdown
            .lock()
            .map(|countdown| CountdownSnapshot::of(&countdown))
            .map_err(|e| format!("Failed to lock countdown state: {}", e))
    }

    /// Store the handle of a newly started ticker
    pub fn set_ticker(&self, handle: TickerHandle) -> Result<(), String> {
        let mut ticker = self
            .ticker
            .lock()
            .map_err(|e| format!("Failed to lock ticker handle: {}", e))?;
        *ticker = Some(handle);
        Ok(())
    }

    /// Take the current ticker handle out of the state, if any
    pub fn take_ticker(&self) -> Result<Option<TickerHandle>, String> {
        let mut ticker = self
            .ticker
            .lock()
            .map_err(|e| format!("Failed to lock ticker handle: {}", e))?;
        Ok(ticker.take())
    }

    /// Whether a ticker task is currently running
    pub fn ticker_running(&self) -> bool {
        self.ticker
            .lock()
            .ok()
            .map(|ticker| ticker.as_ref().is_some_and(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    /// Subscribe to frames as the ticker writes them
    pub fn subscribe_frames(&self) -> watch::Receiver<String> {
        self.frame_rx.clone()
    }

    /// The last frame written to the frame-channel sink
    pub fn current_frame(&self) -> String {
        self.frame_rx.borrow().clone()
    }

    /// Record the last client-visible action with a timestamp
    pub fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
