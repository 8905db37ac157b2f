//! Countdown Board - an HTTP-fronted countdown clock
//!
//! This library drives a remaining-seconds counter from a 1-second tick task,
//! renders it as a zero-padded `HH:MM:SS` string and pushes each frame to a
//! set of display sinks. A small HTTP API arms, stops and observes the clock.

pub mod config;
pub mod state;
pub mod api;
pub mod sink;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, Countdown, CountdownSnapshot, Phase};
pub use api::create_router;
pub use sink::{ConsoleSink, DisplaySink, FrameChannelSink};
pub use tasks::{start_ticker, TickerHandle, TICK_PERIOD};
pub use utils::signals::shutdown_signal;
