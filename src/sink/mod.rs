//! Display sinks
//!
//! A display sink is a write-only destination for rendered countdown frames.
//! The ticker pushes the current `HH:MM:SS` string to every attached sink once
//! per tick and never reads back from them.

pub mod console;
pub mod frame_channel;

// Re-export main types
pub use console::ConsoleSink;
pub use frame_channel::FrameChannelSink;

/// Write-only target for rendered countdown frames
///
/// A failed write is reported to the caller but must not leave the sink in a
/// state where later writes cannot be attempted.
pub trait DisplaySink: Send + Sync + std::fmt::Debug {
    /// Short name used in logs when a write fails
    fn name(&self) -> &'static str;

    /// Push one rendered frame to the sink
    fn write_frame(&self, frame: &str) -> Result<(), String>;
}
