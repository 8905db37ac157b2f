//! Watch-channel display sink

use tokio::sync::watch;

use super::DisplaySink;

/// Sink that publishes the latest frame on a watch channel
///
/// The HTTP layer reads the receiving side, so clients always observe the most
/// recently rendered frame without blocking the ticker.
#[derive(Debug)]
pub struct FrameChannelSink {
    frame_tx: watch::Sender<String>,
}

impl FrameChannelSink {
    pub fn new(frame_tx: watch::Sender<String>) -> Self {
        Self { frame_tx }
    }
}

impl DisplaySink for FrameChannelSink {
    fn name(&self) -> &'static str {
        "frame-channel"
    }

    fn write_frame(&self, frame: &str) -> Result<(), String> {
        self.frame_tx
            .send(frame.to_string())
            .map_err(|e| format!("Failed to publish frame: {}", e))
    }
}
