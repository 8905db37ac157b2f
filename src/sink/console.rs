//! Console display sink

use std::io::{self, Write};

use super::DisplaySink;

/// Sink that mirrors the countdown to stdout
///
/// Each frame overwrites the previous one in place with a carriage return, so
/// the terminal shows a single updating clock line.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl DisplaySink for ConsoleSink {
    fn name(&self) -> &'static str {
        "console"
    }

    fn write_frame(&self, frame: &str) -> Result<(), String> {
        let mut out = io::stdout();
        write!(out, "\r{}", frame).map_err(|e| format!("Failed to write to stdout: {}", e))?;
        out.flush()
            .map_err(|e| format!("Failed to flush stdout: {}", e))
    }
}
